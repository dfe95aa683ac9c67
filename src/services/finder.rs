use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::error::Error;
use crate::models::{
    Coordinate, LocalTime, Outcome, RestaurantResult, ResultDocument, SearchQuery,
    sort_by_distance,
};
use crate::services::api::{ApiService, PageRequest, PlacesApi};
use crate::services::search::search_nearby;
use crate::utils::Delay;

/// What one search run produced, including the degraded paths it took.
#[derive(Debug)]
pub struct SearchReport {
    pub query: SearchQuery,
    pub origin: Option<Coordinate>,
    /// `None` when geocoding failed and no lookup was attempted.
    pub local_time: Option<Outcome<LocalTime>>,
    pub geocode_error: Option<Error>,
    pub pages_fetched: u32,
    pub search_error: Option<Error>,
    pub candidates: usize,
    pub closed: usize,
    pub assumed_open: usize,
    pub restaurants: Vec<RestaurantResult>,
}

impl SearchReport {
    fn empty(query: SearchQuery) -> Self {
        Self {
            query,
            origin: None,
            local_time: None,
            geocode_error: None,
            pages_fetched: 0,
            search_error: None,
            candidates: 0,
            closed: 0,
            assumed_open: 0,
            restaurants: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn into_document(self, generated_at: DateTime<Utc>) -> ResultDocument {
        let local_time = self
            .local_time
            .map(Outcome::into_value)
            .unwrap_or_else(|| LocalTime::utc(generated_at));
        ResultDocument::new(self.query, &local_time, self.restaurants, generated_at)
    }
}

pub struct RestaurantFinder<A, D> {
    api: ApiService<A>,
    delay: D,
    search: SearchConfig,
}

impl<A: PlacesApi, D: Delay> RestaurantFinder<A, D> {
    pub fn new(api: A, delay: D, search: SearchConfig) -> Self {
        Self {
            api: ApiService::new(api),
            delay,
            search,
        }
    }

    pub fn api(&self) -> &A {
        self.api.api()
    }

    /// Geocode, page through nearby restaurants, keep the open ones and
    /// order them nearest first. A failed geocode yields an empty report.
    pub async fn find_open_restaurants(&self, query: SearchQuery, now: DateTime<Utc>) -> SearchReport {
        let mut report = SearchReport::empty(query);

        let origin = match self.api.geocode(&report.query.postal_code).await {
            Ok(origin) => origin,
            Err(e) => {
                info!(
                    postal_code = %report.query.postal_code,
                    "Could not convert postal code to coordinates"
                );
                report.geocode_error = Some(e);
                return report;
            }
        };
        report.origin = Some(origin);

        let local_time = self.api.resolve_local_time(origin, now).await;
        info!(
            postal_code = %report.query.postal_code,
            local_time = %local_time.value(),
            "Resolved local time"
        );
        report.local_time = Some(local_time);

        let first = PageRequest::First {
            origin,
            radius_meters: report.query.radius_meters(),
            keyword: report.query.keyword.clone(),
            price_level: report.query.price_level,
        };
        let pages = search_nearby(&self.api, &self.delay, first, self.search.max_pages).await;
        report.pages_fetched = pages.pages_fetched;
        report.search_error = pages.stopped_by;
        report.candidates = pages.candidates.len();

        for candidate in pages.candidates {
            let open = self.api.is_open_now(&candidate.place_id).await;
            if open.is_fallback() {
                report.assumed_open += 1;
            }
            if !open.into_value() {
                debug!(place_id = %candidate.place_id, name = %candidate.name, "Skipping closed place");
                report.closed += 1;
                continue;
            }
            report
                .restaurants
                .push(RestaurantResult::from_candidate(candidate, &origin));
        }

        sort_by_distance(&mut report.restaurants);

        info!(
            pages = report.pages_fetched,
            candidates = report.candidates,
            open = report.restaurants.len(),
            closed = report.closed,
            assumed_open = report.assumed_open,
            "Search complete"
        );

        report
    }
}
