use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_MILES: f64 = 3958.8;
pub const METERS_PER_MILE: f64 = 1609.34;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance in miles (haversine).
    pub fn distance_miles(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_MILES * c
    }

    /// `"lat,lng"` as the upstream APIs expect it.
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
