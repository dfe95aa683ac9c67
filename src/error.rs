use std::fmt;

use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Upstream endpoints the finder talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocode,
    TimeZone,
    NearbySearch,
    PlaceDetails,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Geocode => "geocode",
            Endpoint::TimeZone => "timezone",
            Endpoint::NearbySearch => "nearby_search",
            Endpoint::PlaceDetails => "place_details",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] rquest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{endpoint} request failed with status {status}")]
    UnexpectedStatus { endpoint: Endpoint, status: StatusCode },

    #[error("{endpoint} returned status {status}{}", suffix(.message))]
    ApiStatus {
        endpoint: Endpoint,
        status: String,
        message: Option<String>,
    },

    #[error("{endpoint} returned no usable result")]
    NoResults { endpoint: Endpoint },

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("API key not found, set the {0} environment variable")]
    MissingApiKey(&'static str),
}

impl Error {
    /// Upstream answered with a non-OK status field.
    pub fn api_status(endpoint: Endpoint, status: &str, message: Option<&str>) -> Self {
        Error::ApiStatus {
            endpoint,
            status: status.to_string(),
            message: message.map(str::to_string),
        }
    }
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}
