use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::geo::Coordinate;
use super::place::PlaceCandidate;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneResponse {
    pub status: String,
    pub time_zone_id: Option<String>,
    pub raw_offset: Option<i64>,
    pub dst_offset: Option<i64>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default, deserialize_with = "skip_malformed_places")]
    pub results: Vec<PlaceCandidate>,
    pub next_page_token: Option<String>,
    pub error_message: Option<String>,
}

/// Drops individual place records that don't decode instead of failing the page.
fn skip_malformed_places<'de, D>(deserializer: D) -> Result<Vec<PlaceCandidate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let places = raw
        .into_iter()
        .filter_map(|value| {
            let place_id = value.get("place_id").and_then(|id| id.as_str()).map(str::to_string);
            serde_json::from_value::<PlaceCandidate>(value)
                .inspect_err(|e| {
                    warn!(place_id = ?place_id, error = %e, "Skipping malformed place record");
                })
                .ok()
        })
        .collect();
    Ok(places)
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetails>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
}

impl PlaceDetailsResponse {
    pub fn open_now(&self) -> Option<bool> {
        self.result
            .as_ref()
            .and_then(|r| r.opening_hours.as_ref())
            .and_then(|h| h.open_now)
    }
}
