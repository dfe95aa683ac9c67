use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use super::place::RestaurantResult;
use super::query::SearchQuery;
use super::time::LocalTime;

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    #[serde(flatten)]
    pub query: SearchQuery,
    pub total_restaurants: usize,
    pub timestamp: DateTime<Utc>,
    pub local_time: DateTime<FixedOffset>,
    pub time_zone: String,
}

/// Everything written to the output file for one run.
#[derive(Debug, Clone, Serialize)]
pub struct ResultDocument {
    pub metadata: Metadata,
    pub restaurants: Vec<RestaurantResult>,
}

impl ResultDocument {
    pub fn new(
        query: SearchQuery,
        local_time: &LocalTime,
        restaurants: Vec<RestaurantResult>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            metadata: Metadata {
                query,
                total_restaurants: restaurants.len(),
                timestamp: generated_at,
                local_time: local_time.time,
                time_zone: local_time.zone.clone(),
            },
            restaurants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceLevel;
    use chrono::TimeZone;

    #[test]
    fn metadata_echoes_query_under_stable_names() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap();
        let query = SearchQuery::new("94103", 1.5)
            .with_keyword(Some("ramen".to_string()))
            .with_price_level(PriceLevel::new(2));
        let doc = ResultDocument::new(query, &LocalTime::utc(now), Vec::new(), now);

        let json = serde_json::to_value(&doc).unwrap();
        let meta = &json["metadata"];
        assert_eq!(meta["zipcode"], "94103");
        assert_eq!(meta["radius_miles"], 1.5);
        assert_eq!(meta["search_term"], "ramen");
        assert_eq!(meta["price_level"], 2);
        assert_eq!(meta["total_restaurants"], 0);
        assert_eq!(meta["timestamp"], "2024-05-01T18:30:00Z");
        assert_eq!(meta["time_zone"], "UTC");
        assert!(json["restaurants"].as_array().unwrap().is_empty());
    }

    #[test]
    fn absent_filters_serialize_as_null() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap();
        let doc = ResultDocument::new(SearchQuery::new("94103", 1.0), &LocalTime::utc(now), Vec::new(), now);
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["metadata"]["search_term"].is_null());
        assert!(json["metadata"]["price_level"].is_null());
    }
}
