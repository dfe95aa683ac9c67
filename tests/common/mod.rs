#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use restaurant_finder::error::{Endpoint, Error, Result};
use restaurant_finder::models::{
    Coordinate, GeocodeResponse, NearbySearchResponse, PlaceDetailsResponse, TimeZoneResponse,
};
use restaurant_finder::services::{PageRequest, PlacesApi};
use restaurant_finder::utils::Delay;

/// Scripted upstream answer: a JSON body served with 200, or a bare status.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(String),
    Status(u16),
}

impl Reply {
    pub fn json(value: Value) -> Self {
        Reply::Json(value.to_string())
    }

    fn decode<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        match self {
            Reply::Json(body) => serde_json::from_str(body).map_err(Error::from),
            Reply::Status(code) => Err(Error::UnexpectedStatus {
                endpoint,
                status: StatusCode::from_u16(*code).unwrap(),
            }),
        }
    }
}

pub struct FakePlacesApi {
    pub geocode: Reply,
    pub time_zone: Reply,
    /// Served in order; the last one repeats once the list runs out.
    pub pages: Vec<Reply>,
    pub details: HashMap<String, Reply>,
    pub default_details: Reply,
    pub page_requests: Mutex<Vec<PageRequest>>,
    pub detail_requests: Mutex<Vec<String>>,
}

impl FakePlacesApi {
    pub fn new() -> Self {
        Self {
            geocode: Reply::json(geocode_ok(40.7484, -73.9857)),
            time_zone: Reply::json(json!({
                "status": "OK",
                "timeZoneId": "America/New_York",
                "rawOffset": -18000,
                "dstOffset": 0
            })),
            pages: vec![Reply::json(page(vec![], None))],
            details: HashMap::new(),
            default_details: Reply::json(details(Some(true))),
            page_requests: Mutex::new(Vec::new()),
            detail_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_pages(mut self, pages: Vec<Reply>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_details(mut self, place_id: &str, reply: Reply) -> Self {
        self.details.insert(place_id.to_string(), reply);
        self
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.detail_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesApi for FakePlacesApi {
    async fn geocode(&self, _postal_code: &str) -> Result<GeocodeResponse> {
        self.geocode.decode(Endpoint::Geocode)
    }

    async fn time_zone(&self, _location: Coordinate, _timestamp: i64) -> Result<TimeZoneResponse> {
        self.time_zone.decode(Endpoint::TimeZone)
    }

    async fn nearby_search(&self, request: &PageRequest) -> Result<NearbySearchResponse> {
        let mut requests = self.page_requests.lock().unwrap();
        let index = requests.len().min(self.pages.len() - 1);
        requests.push(request.clone());
        self.pages[index].decode(Endpoint::NearbySearch)
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse> {
        self.detail_requests.lock().unwrap().push(place_id.to_string());
        self.details
            .get(place_id)
            .unwrap_or(&self.default_details)
            .decode(Endpoint::PlaceDetails)
    }
}

/// Counts pauses instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    pauses: AtomicUsize,
}

impl RecordingDelay {
    pub fn count(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn geocode_ok(lat: f64, lng: f64) -> Value {
    json!({
        "status": "OK",
        "results": [{
            "formatted_address": "New York, NY 10001, USA",
            "geometry": {"location": {"lat": lat, "lng": lng}}
        }]
    })
}

pub fn place(id: &str, name: &str, lat: f64, lng: f64) -> Value {
    json!({
        "place_id": id,
        "name": name,
        "geometry": {"location": {"lat": lat, "lng": lng}},
        "price_level": 1,
        "rating": 4.3,
        "user_ratings_total": 52,
        "types": ["restaurant", "food", "point_of_interest", "establishment"],
        "vicinity": format!("{name} Street")
    })
}

pub fn page(places: Vec<Value>, next_page_token: Option<&str>) -> Value {
    let mut body = json!({"status": "OK", "results": places});
    if let Some(token) = next_page_token {
        body["next_page_token"] = json!(token);
    }
    body
}

pub fn details(open_now: Option<bool>) -> Value {
    match open_now {
        Some(open) => json!({"status": "OK", "result": {"opening_hours": {"open_now": open}}}),
        None => json!({"status": "OK", "result": {}}),
    }
}
