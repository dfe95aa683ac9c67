use std::fmt;
use std::path::PathBuf;

use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub geocode_url: String,
    pub timezone_url: String,
    pub nearby_search_url: String,
    pub details_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocode_url: "https://maps.googleapis.com/maps/api/geocode/json".to_string(),
            timezone_url: "https://maps.googleapis.com/maps/api/timezone/json".to_string(),
            nearby_search_url: "https://maps.googleapis.com/maps/api/place/nearbysearch/json"
                .to_string(),
            details_url: "https://maps.googleapis.com/maps/api/place/details/json".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on nearby-search pages, first page included.
    pub max_pages: u32,
    /// Continuation tokens are rejected until this much time has passed.
    pub page_token_delay_ms: u64,
    pub page_token_jitter_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_pages: 3,
            page_token_delay_ms: 2000,
            page_token_jitter_ms: 0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub preview_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("results.json"),
            preview_limit: 5,
        }
    }
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            api = ?settings.api,
            search = ?settings.search,
            output = ?settings.output,
            "Loaded settings"
        );

        Ok(settings)
    }
}

/// Static credential for the upstream APIs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::MissingApiKey(API_KEY_VAR));
        }
        Ok(Self(key))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the key through `lookup`, keyed by [`API_KEY_VAR`].
    pub fn from_lookup(lookup: impl FnOnce(&str) -> Option<String>) -> Result<Self> {
        let key = lookup(API_KEY_VAR).ok_or(Error::MissingApiKey(API_KEY_VAR))?;
        Self::new(key)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
