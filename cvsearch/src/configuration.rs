use std::time::Duration;

use config::{Config, Environment};
use cve_sources::{sources::DEFAULT_TIMEOUT, Endpoints, FetchError, Sources};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub address: String,
    pub port: u16,
}

impl ApiSettings {
    pub fn try_from_env() -> Result<Self, config::ConfigError> {
        Config::builder()
            .set_default("address", "0.0.0.0")?
            .set_default("port", 8000)?
            .add_source(Environment::with_prefix("CVSEARCH").prefix_separator("_"))
            .build()?
            .try_deserialize::<Self>()
    }
}

/// Upstream providers and how to reach them.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FeedSettings {
    pub shodan_url: String,
    pub nist_url: String,
    pub mitre_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        let endpoints = Endpoints::default();
        Self {
            shodan_url: endpoints.shodan,
            nist_url: endpoints.nist,
            mitre_url: endpoints.mitre,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: format!("cvsearch/{}", crate::version()),
        }
    }
}

impl FeedSettings {
    pub fn try_from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("shodan_url", defaults.shodan_url)?
            .set_default("nist_url", defaults.nist_url)?
            .set_default("mitre_url", defaults.mitre_url)?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(Environment::with_prefix("FEEDS").prefix_separator("_"))
            .build()?
            .try_deserialize::<Self>()
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            shodan: self.shodan_url.clone(),
            nist: self.nist_url.clone(),
            mitre: self.mitre_url.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// A fresh client for the configured providers.
    pub fn sources(&self) -> Result<Sources, FetchError> {
        Sources::new(self.endpoints(), self.timeout(), &self.user_agent)
    }
}
