use reqwest::blocking::Client;
use serde::Deserialize;

use super::get_json;
use crate::record::lenient;

pub const SOURCE_NAME: &str = "mitre";
pub const BASE_URL: &str = "https://cveawg.mitre.org";

#[derive(Debug, Deserialize)]
struct CveRecord {
    containers: Containers,
}

#[derive(Debug, Deserialize)]
struct Containers {
    cna: Cna,
}

#[derive(Debug, Deserialize)]
struct Cna {
    #[serde(default, deserialize_with = "lenient::text")]
    title: Option<String>,
}

/// Title the CVE numbering authority gave to `cve_id`, if any.
///
/// Enrichment only: every failure is logged and turned into `None`.
pub fn fetch_title(client: &Client, base_url: &str, cve_id: &str) -> Option<String> {
    let url = format!("{}/api/cve/{}", base_url.trim_end_matches('/'), cve_id);

    match get_json::<CveRecord>(SOURCE_NAME, client.get(url)) {
        Ok(record) => record.containers.cna.title,
        Err(err) => {
            log::debug!("no title for {}: {}", cve_id, err);
            None
        }
    }
}
