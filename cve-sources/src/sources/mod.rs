use std::time::{Duration, Instant};

use reqwest::blocking::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};

use crate::record::VulnerabilityRecord;

pub mod mitre;
pub mod nist;
pub mod shodan;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("could not create http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("error contacting upstream: {0}")]
    Network(#[source] reqwest::Error),
    #[error("upstream did not answer in time: {0}")]
    Timeout(#[source] reqwest::Error),
    #[error("upstream answered with status {0}")]
    HttpStatus(u16),
    #[error("could not decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Network(error)
        }
    }
}

/// Base URLs of the upstream providers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoints {
    /// CVE detail service, keyed by id.
    pub shodan: String,
    /// Keyword search service.
    pub nist: String,
    /// Record authority, used for titles only.
    pub mitre: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            shodan: shodan::BASE_URL.to_string(),
            nist: nist::BASE_URL.to_string(),
            mitre: mitre::BASE_URL.to_string(),
        }
    }
}

/// Where vulnerability data comes from.
pub trait Feed {
    /// Full record for a single CVE id, title included.
    fn fetch_by_id(&self, cve_id: &str) -> Result<VulnerabilityRecord, FetchError>;

    /// Matches for a free-text keyword. No match is an empty list, not an error.
    fn search_by_keyword(&self, keyword: &str) -> Result<Vec<VulnerabilityRecord>, FetchError>;
}

/// The live providers, reached over one blocking HTTP client.
pub struct Sources {
    client: Client,
    endpoints: Endpoints,
}

impl Sources {
    pub fn new(
        endpoints: Endpoints,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Some(timeout))
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, endpoints })
    }
}

impl Feed for Sources {
    fn fetch_by_id(&self, cve_id: &str) -> Result<VulnerabilityRecord, FetchError> {
        let mut record = shodan::fetch_by_id(&self.client, &self.endpoints.shodan, cve_id)?;

        let title = mitre::fetch_title(&self.client, &self.endpoints.mitre, cve_id);
        record.title = Some(title.unwrap_or_else(|| cve_id.to_string()));

        Ok(record)
    }

    fn search_by_keyword(&self, keyword: &str) -> Result<Vec<VulnerabilityRecord>, FetchError> {
        nist::search_by_keyword(&self.client, &self.endpoints.nist, keyword)
    }
}

/// Sends the request and decodes a successful JSON body.
pub(crate) fn get_json<T: DeserializeOwned>(
    source: &str,
    request: RequestBuilder,
) -> Result<T, FetchError> {
    let start = Instant::now();

    let response = request.send().map_err(FetchError::from_transport)?;

    let status = response.status();
    log::debug!("{} answered {} in {:?}", source, status, start.elapsed());

    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.text().map_err(FetchError::from_transport)?;

    Ok(serde_json::from_str(&body)?)
}
