use async_trait::async_trait;

use crate::clients::http::{HttpClient, QueryParams};
use crate::config::{ApiConfig, ApiKey};
use crate::error::{Endpoint, Result};
use crate::models::{
    Coordinate, GeocodeResponse, NearbySearchResponse, PlaceDetailsResponse, TimeZoneResponse,
};
use crate::services::api::{PageRequest, PlacesApi};

pub const RESTAURANT_TYPE: &str = "restaurant";

/// Google Maps Platform geocoding, time zone and places endpoints.
pub struct GoogleMapsClient {
    http: HttpClient,
    config: ApiConfig,
}

impl GoogleMapsClient {
    pub fn new(config: &ApiConfig, api_key: ApiKey) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config, api_key)?,
            config: config.clone(),
        })
    }
}

pub fn nearby_search_params(request: &PageRequest) -> QueryParams {
    match request {
        PageRequest::First {
            origin,
            radius_meters,
            keyword,
            price_level,
        } => {
            let mut params = vec![
                ("location", origin.to_query_value()),
                ("radius", radius_meters.to_string()),
                ("type", RESTAURANT_TYPE.to_string()),
            ];
            if let Some(keyword) = keyword {
                params.push(("keyword", keyword.clone()));
            }
            // Exact match: min and max pinned to the same level.
            if let Some(level) = price_level {
                params.push(("minprice", level.to_string()));
                params.push(("maxprice", level.to_string()));
            }
            params
        }
        PageRequest::Next { token } => vec![("pagetoken", token.clone())],
    }
}

#[async_trait]
impl PlacesApi for GoogleMapsClient {
    async fn geocode(&self, postal_code: &str) -> Result<GeocodeResponse> {
        let params = vec![("address", postal_code.to_string())];
        self.http
            .get_json(Endpoint::Geocode, &self.config.geocode_url, params)
            .await
    }

    async fn time_zone(&self, location: Coordinate, timestamp: i64) -> Result<TimeZoneResponse> {
        let params = vec![
            ("location", location.to_query_value()),
            ("timestamp", timestamp.to_string()),
        ];
        self.http
            .get_json(Endpoint::TimeZone, &self.config.timezone_url, params)
            .await
    }

    async fn nearby_search(&self, request: &PageRequest) -> Result<NearbySearchResponse> {
        self.http
            .get_json(
                Endpoint::NearbySearch,
                &self.config.nearby_search_url,
                nearby_search_params(request),
            )
            .await
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse> {
        let params = vec![
            ("place_id", place_id.to_string()),
            ("fields", "opening_hours".to_string()),
        ];
        self.http
            .get_json(Endpoint::PlaceDetails, &self.config.details_url, params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceLevel;

    fn param<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn first_page_restricts_to_restaurants_and_pins_price() {
        let request = PageRequest::First {
            origin: Coordinate::new(40.75, -73.99),
            radius_meters: 1609.34,
            keyword: Some("dim sum".to_string()),
            price_level: PriceLevel::new(2),
        };

        let params = nearby_search_params(&request);
        assert_eq!(param(&params, "location"), Some("40.75,-73.99"));
        assert_eq!(param(&params, "radius"), Some("1609.34"));
        assert_eq!(param(&params, "type"), Some("restaurant"));
        assert_eq!(param(&params, "keyword"), Some("dim sum"));
        assert_eq!(param(&params, "minprice"), Some("2"));
        assert_eq!(param(&params, "maxprice"), Some("2"));
    }

    #[test]
    fn first_page_without_filters() {
        let request = PageRequest::First {
            origin: Coordinate::new(0.0, 0.0),
            radius_meters: 100.0,
            keyword: None,
            price_level: None,
        };

        let params = nearby_search_params(&request);
        assert_eq!(param(&params, "keyword"), None);
        assert_eq!(param(&params, "minprice"), None);
        assert_eq!(param(&params, "maxprice"), None);
    }

    #[test]
    fn continuation_only_sends_the_token() {
        let params = nearby_search_params(&PageRequest::Next { token: "abc".to_string() });
        assert_eq!(params, vec![("pagetoken", "abc".to_string())]);
    }
}
