use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CVE_ID: Regex = Regex::new(r"(?i)^CVE-[0-9]{4}-[0-9]{4,}$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    CveId,
    Keyword,
}

/// Tells a CVE identifier apart from a free-text keyword.
///
/// Surrounding whitespace is ignored and the match is case-insensitive.
/// Every input is classifiable, the empty string is a `Keyword`.
pub fn classify(text: &str) -> QueryKind {
    if CVE_ID.is_match(text.trim()) {
        QueryKind::CveId
    } else {
        QueryKind::Keyword
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
        }
    }

    /// The trimmed query, case preserved.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QueryKind {
        classify(&self.text)
    }
}
