/// Value some provider schemas return in place of a missing field.
pub const PLACEHOLDER: &str = "string";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KnownExploited {
    Yes,
    No,
    #[default]
    Unknown,
}

impl KnownExploited {
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Provider-neutral view of a single vulnerability.
///
/// Every field is optional: adapters leave a field empty when the provider
/// omitted it or answered with [`PLACEHOLDER`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VulnerabilityRecord {
    pub cve_id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub cvss: Option<f64>,
    pub cvss_v2: Option<f64>,
    pub cvss_v3: Option<f64>,
    pub epss: Option<f64>,
    pub ranking_epss: Option<f64>,
    pub kev: KnownExploited,
    pub propose_action: Option<String>,
    pub ransomware_campaign: Option<String>,
    pub references: Vec<String>,
    pub cpes: Vec<String>,
    pub published_time: Option<String>,
}

pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != PLACEHOLDER)
}

/// Deserializers shared by the provider schemas.
///
/// They never fail on a wrong JSON type: a value of the wrong shape is
/// reported as absent, the same as a placeholder.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{present, KnownExploited, PLACEHOLDER};

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(present(value.and_then(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })))
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(Value::as_f64))
    }

    pub fn texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let items = match value {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() && s != PLACEHOLDER => Some(s),
                _ => None,
            })
            .collect())
    }

    pub fn known_exploited<'de, D>(deserializer: D) -> Result<KnownExploited, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Bool(true)) => KnownExploited::Yes,
            Some(Value::Bool(false)) => KnownExploited::No,
            _ => KnownExploited::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient::text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "lenient::number")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "lenient::texts")]
        links: Vec<String>,
        #[serde(default, deserialize_with = "lenient::known_exploited")]
        kev: KnownExploited,
    }

    fn sample(value: serde_json::Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn placeholder_is_absent_in_every_field() {
        let p = sample(json!({
            "label": "string",
            "score": "string",
            "links": ["string"],
            "kev": "string",
        }));

        assert_eq!(p.label, None);
        assert_eq!(p.score, None);
        assert!(p.links.is_empty());
        assert_eq!(p.kev, KnownExploited::Unknown);
    }

    #[test]
    fn missing_and_null_fields_are_absent() {
        let p = sample(json!({ "label": null, "links": null }));

        assert_eq!(p.label, None);
        assert_eq!(p.score, None);
        assert!(p.links.is_empty());
        assert_eq!(p.kev, KnownExploited::Unknown);
    }

    #[test]
    fn real_values_survive() {
        let p = sample(json!({
            "label": "Log4Shell",
            "score": 10,
            "links": ["https://a.example", "string", 4, "https://b.example"],
            "kev": true,
        }));

        assert_eq!(p.label.as_deref(), Some("Log4Shell"));
        assert_eq!(p.score, Some(10.0));
        assert_eq!(p.links, vec!["https://a.example", "https://b.example"]);
        assert_eq!(p.kev, KnownExploited::Yes);
    }

    #[test]
    fn false_kev_is_no() {
        assert_eq!(sample(json!({ "kev": false })).kev, KnownExploited::No);
    }
}
