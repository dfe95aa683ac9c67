use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::geo::{Coordinate, round_to_hundredths};
use super::price::price_display;
use super::response::Geometry;

pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";
pub const NO_RATING: &str = "No rating";

/// Raw place record from a nearby-search page.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: String,
    pub geometry: Geometry,
    pub price_level: Option<i64>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub types: Vec<String>,
    pub vicinity: Option<String>,
}

impl PlaceCandidate {
    pub fn location(&self) -> Coordinate {
        self.geometry.location
    }
}

/// Star rating, or the "No rating" marker when upstream has none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Stars(f64),
    Unrated,
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Rating::Unrated, Rating::Stars)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Stars(stars) => write!(f, "{stars}"),
            Rating::Unrated => f.write_str(NO_RATING),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Stars(stars) => serializer.serialize_f64(*stars),
            Rating::Unrated => serializer.serialize_str(NO_RATING),
        }
    }
}

/// Open restaurant enriched with distance and display fields.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantResult {
    pub name: String,
    pub address: String,
    pub distance_miles: f64,
    pub rating: Rating,
    pub user_ratings_total: u64,
    pub price_level_numeric: Option<i64>,
    pub place_id: String,
    pub types: Vec<String>,
    pub price_level: String,
}

impl RestaurantResult {
    pub fn from_candidate(candidate: PlaceCandidate, origin: &Coordinate) -> Self {
        let distance = origin.distance_miles(&candidate.location());

        Self {
            name: candidate.name,
            address: candidate
                .vicinity
                .unwrap_or_else(|| ADDRESS_NOT_AVAILABLE.to_string()),
            distance_miles: round_to_hundredths(distance),
            rating: candidate.rating.into(),
            user_ratings_total: candidate.user_ratings_total.unwrap_or(0),
            price_level_numeric: candidate.price_level,
            place_id: candidate.place_id,
            types: candidate.types,
            price_level: price_display(candidate.price_level),
        }
    }
}

/// Stable ascending sort on distance.
pub fn sort_by_distance(results: &mut [RestaurantResult]) {
    results.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
}
