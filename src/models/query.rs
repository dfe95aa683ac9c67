use serde::Serialize;

use super::geo::miles_to_meters;
use super::price::PriceLevel;

/// Parameters of one search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    #[serde(rename = "zipcode")]
    pub postal_code: String,
    pub radius_miles: f64,
    #[serde(rename = "search_term")]
    pub keyword: Option<String>,
    pub price_level: Option<PriceLevel>,
}

impl SearchQuery {
    pub fn new(postal_code: impl Into<String>, radius_miles: f64) -> Self {
        Self {
            postal_code: postal_code.into(),
            radius_miles,
            keyword: None,
            price_level: None,
        }
    }

    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_price_level(mut self, price_level: Option<PriceLevel>) -> Self {
        self.price_level = price_level;
        self
    }

    pub fn radius_meters(&self) -> f64 {
        miles_to_meters(self.radius_miles)
    }
}
