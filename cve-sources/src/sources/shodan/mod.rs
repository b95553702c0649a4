use reqwest::blocking::Client;
use serde::Deserialize;

use super::{get_json, FetchError};
use crate::record::{lenient, KnownExploited, VulnerabilityRecord};

pub const SOURCE_NAME: &str = "cvedb";
pub const BASE_URL: &str = "https://cvedb.shodan.io";

/// Body of `GET /cve/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct CveDetail {
    #[serde(default, deserialize_with = "lenient::text")]
    pub cve_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cvss: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cvss_v2: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cvss_v3: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub epss: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ranking_epss: Option<f64>,
    #[serde(default, deserialize_with = "lenient::known_exploited")]
    pub kev: KnownExploited,
    #[serde(default, deserialize_with = "lenient::text")]
    pub propose_action: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ransomware_campaign: Option<String>,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub references: Vec<String>,
    #[serde(default, deserialize_with = "lenient::texts")]
    pub cpes: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub published_time: Option<String>,
}

impl From<CveDetail> for VulnerabilityRecord {
    fn from(detail: CveDetail) -> Self {
        Self {
            cve_id: detail.cve_id,
            title: None,
            summary: detail.summary,
            cvss: detail.cvss,
            cvss_v2: detail.cvss_v2,
            cvss_v3: detail.cvss_v3,
            epss: detail.epss,
            ranking_epss: detail.ranking_epss,
            kev: detail.kev,
            propose_action: detail.propose_action,
            ransomware_campaign: detail.ransomware_campaign,
            references: detail.references,
            cpes: detail.cpes,
            published_time: detail.published_time,
        }
    }
}

pub fn fetch_by_id(
    client: &Client,
    base_url: &str,
    cve_id: &str,
) -> Result<VulnerabilityRecord, FetchError> {
    log::info!("fetching {} from {} ...", cve_id, SOURCE_NAME);

    let url = format!("{}/cve/{}", base_url.trim_end_matches('/'), cve_id);
    let detail: CveDetail = get_json(SOURCE_NAME, client.get(url))?;

    Ok(detail.into())
}
