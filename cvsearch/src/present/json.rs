use std::collections::BTreeMap;

use cve_sources::{
    normalize::{CveReport, KeywordReport},
    KnownExploited, NormalizedResult,
};
use serde::Serialize;

/// Response body of `GET /api/search/{term}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchBody {
    Cve(Box<CveBody>),
    /// Keyword matches keyed by position, starting at 0.
    Matches(BTreeMap<usize, MatchBody>),
}

#[derive(Debug, Serialize)]
pub struct CveBody {
    pub title: String,
    pub cve: String,
    pub summary: Option<String>,
    pub is_kev: &'static str,
    pub exploits: Vec<String>,
    pub references: Vec<String>,
    pub links: Vec<String>,
    pub cvss: Option<f64>,
    pub epss: Option<f64>,
    pub published: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MatchBody {
    pub cve: String,
    pub summary: String,
}

fn kev_label(kev: KnownExploited) -> &'static str {
    match kev {
        KnownExploited::Yes => "Yes",
        KnownExploited::No => "No",
        KnownExploited::Unknown => "Error on request",
    }
}

impl From<CveReport> for CveBody {
    fn from(report: CveReport) -> Self {
        let record = report.record;

        Self {
            title: record.title.unwrap_or_else(|| report.cve_id.clone()),
            summary: record.summary,
            is_kev: kev_label(record.kev),
            exploits: report.exploit_searches.into_iter().map(|s| s.url).collect(),
            references: record.references,
            links: report.links.iter().map(str::to_string).collect(),
            cvss: record.cvss,
            epss: record.epss,
            published: record.published_time,
            cve: report.cve_id,
        }
    }
}

fn matches_body(report: KeywordReport) -> BTreeMap<usize, MatchBody> {
    report
        .matches
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            (
                i,
                MatchBody {
                    cve: m.cve_id,
                    summary: m.short_description,
                },
            )
        })
        .collect()
}

impl From<NormalizedResult> for SearchBody {
    fn from(result: NormalizedResult) -> Self {
        match result {
            NormalizedResult::Cve(report) => Self::Cve(Box::new(report.into())),
            NormalizedResult::Keyword(report) => Self::Matches(matches_body(report)),
        }
    }
}
