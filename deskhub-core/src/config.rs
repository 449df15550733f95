//! Typed configuration for remote-backed screens.

use serde::{Deserialize, Serialize};
use url::Url;

/// Where the dashboard backend lives. One base URL per deployment; each
/// remote screen joins its own listing path onto it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: Url,
}

impl RemoteConfig {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Load from `DESKHUB_`-prefixed environment variables
    /// (`DESKHUB_BASE_URL=https://api.example.com/`).
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("DESKHUB"))
            .build()?
            .try_deserialize()
    }

    /// Resolve a screen's listing endpoint against the base URL.
    pub fn endpoint_for(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}
