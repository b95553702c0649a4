use reqwest::blocking::Client;
use serde::Deserialize;

use super::{get_json, FetchError};
use crate::record::{lenient, present, VulnerabilityRecord};

pub const SOURCE_NAME: &str = "NIST";
pub const BASE_URL: &str = "https://services.nvd.nist.gov";
pub const NO_DESCRIPTION: &str = "No descriptions.";

/// Body of the CVE API 2.0 search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Vulnerability {
    #[serde(default)]
    pub cve: Cve,
}

#[derive(Debug, Default, Deserialize)]
pub struct Cve {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub published: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub references: Vec<Reference>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Description {
    #[serde(default, deserialize_with = "lenient::text")]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Metrics {
    #[serde(default, rename = "cvssMetricV31")]
    pub v31: Vec<Metric>,
    #[serde(default, rename = "cvssMetricV30")]
    pub v30: Vec<Metric>,
    #[serde(default, rename = "cvssMetricV2")]
    pub v2: Vec<Metric>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    #[serde(default)]
    pub cvss_data: CvssData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssData {
    #[serde(default, deserialize_with = "lenient::number")]
    pub base_score: Option<f64>,
}

fn first_score(metrics: &[Metric]) -> Option<f64> {
    metrics.iter().find_map(|m| m.cvss_data.base_score)
}

impl Metrics {
    pub fn v3_score(&self) -> Option<f64> {
        first_score(&self.v31).or_else(|| first_score(&self.v30))
    }

    pub fn v2_score(&self) -> Option<f64> {
        first_score(&self.v2)
    }
}

impl Cve {
    /// First description the provider listed, whatever its language.
    pub fn summary(&self) -> Option<&str> {
        self.descriptions.iter().find_map(|d| d.value.as_deref())
    }
}

impl From<Vulnerability> for VulnerabilityRecord {
    fn from(item: Vulnerability) -> Self {
        let cve = item.cve;

        let summary = present(cve.summary().map(str::to_string))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let cvss_v3 = cve.metrics.v3_score();
        let cvss_v2 = cve.metrics.v2_score();

        Self {
            cve_id: cve.id,
            summary: Some(summary),
            cvss: cvss_v3.or(cvss_v2),
            cvss_v2,
            cvss_v3,
            references: cve.references.into_iter().filter_map(|r| r.url).collect(),
            published_time: cve.published,
            ..Default::default()
        }
    }
}

pub fn search_by_keyword(
    client: &Client,
    base_url: &str,
    keyword: &str,
) -> Result<Vec<VulnerabilityRecord>, FetchError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        log::debug!("empty keyword, nothing to search");
        return Ok(Vec::new());
    }

    log::info!("searching {} for '{}' ...", SOURCE_NAME, keyword);

    let url = format!("{}/rest/json/cves/2.0", base_url.trim_end_matches('/'));
    let request = client.get(url).query(&[("keywordSearch", keyword)]);

    let response: SearchResponse = get_json(SOURCE_NAME, request)?;

    log::info!(
        "{} returned {} of {} results",
        SOURCE_NAME,
        response.vulnerabilities.len(),
        response.total_results
    );

    Ok(response
        .vulnerabilities
        .into_iter()
        .map(VulnerabilityRecord::from)
        .collect())
}
