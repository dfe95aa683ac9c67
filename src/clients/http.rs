use std::time::Duration;

use http::StatusCode;
use rquest::Client;
use rquest_util::Emulation;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::{ApiConfig, ApiKey};
use crate::error::{Endpoint, Error, Result};

pub type QueryParams = Vec<(&'static str, String)>;

/// GET-only JSON client that signs every request with the API key.
pub struct HttpClient {
    client: Client,
    api_key: ApiKey,
}

impl HttpClient {
    pub fn new(config: &ApiConfig, api_key: ApiKey) -> Result<Self> {
        debug!(timeout_secs = config.timeout_secs, "Creating HTTP client");

        let client = Client::builder()
            .emulation(Emulation::Chrome133)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, api_key })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        params: QueryParams,
    ) -> Result<T> {
        debug!(
            endpoint = %endpoint,
            url = url,
            params = ?params,
            "Sending request"
        );

        let mut query = params;
        query.push(("key", self.api_key.expose().to_string()));

        let response = self.client.get(url).query(&query).send().await?;
        let status = response.status();

        debug!(
            endpoint = %endpoint,
            status = status.as_u16(),
            "Response received"
        );

        if status != StatusCode::OK {
            error!(
                endpoint = %endpoint,
                status = status.as_u16(),
                "Unexpected status code"
            );
            return Err(Error::UnexpectedStatus { endpoint, status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                endpoint = %endpoint,
                error = %e,
                body = %body_str,
                "Failed to parse response"
            );
            Error::from(e)
        })
    }
}
