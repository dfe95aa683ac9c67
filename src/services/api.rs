use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, error, info, warn};

use crate::error::{Endpoint, Error, Result};
use crate::models::{
    Coordinate, GeocodeResponse, LocalTime, NearbySearchResponse, Outcome, PlaceDetailsResponse,
    PriceLevel, STATUS_OK, STATUS_ZERO_RESULTS, TimeZoneResponse,
};

/// One nearby-search request: the initial query or a continuation.
#[derive(Debug, Clone, PartialEq)]
pub enum PageRequest {
    First {
        origin: Coordinate,
        radius_meters: f64,
        keyword: Option<String>,
        price_level: Option<PriceLevel>,
    },
    Next {
        token: String,
    },
}

/// Raw access to the upstream geocoding, time zone and places endpoints.
///
/// Implementations report transport failures, non-200 responses and
/// undecodable bodies as errors; the upstream `status` field is left for
/// [`ApiService`] to interpret.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn geocode(&self, postal_code: &str) -> Result<GeocodeResponse>;

    async fn time_zone(&self, location: Coordinate, timestamp: i64) -> Result<TimeZoneResponse>;

    async fn nearby_search(&self, request: &PageRequest) -> Result<NearbySearchResponse>;

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse>;
}

/// Applies the status and fallback rules on top of a [`PlacesApi`].
pub struct ApiService<A> {
    api: A,
}

impl<A: PlacesApi> ApiService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn geocode(&self, postal_code: &str) -> Result<Coordinate> {
        let response = self.api.geocode(postal_code).await.inspect_err(|e| {
            error!(postal_code = postal_code, error = %e, "Geocoding request failed");
        })?;

        if response.status != STATUS_OK {
            let err = Error::api_status(
                Endpoint::Geocode,
                &response.status,
                response.error_message.as_deref(),
            );
            log_status(&response.status, &err);
            return Err(err);
        }

        let location = response
            .results
            .first()
            .map(|r| r.geometry.location)
            .ok_or(Error::NoResults { endpoint: Endpoint::Geocode })?;

        debug!(
            postal_code = postal_code,
            lat = location.latitude,
            lng = location.longitude,
            "Geocoded postal code"
        );

        Ok(location)
    }

    /// Current time at `location`, or UTC when the zone can't be resolved.
    pub async fn resolve_local_time(
        &self,
        location: Coordinate,
        now: DateTime<Utc>,
    ) -> Outcome<LocalTime> {
        match self.lookup_local_time(location, now).await {
            Ok(local) => Outcome::Resolved(local),
            Err((Some(local), reason)) => {
                warn!(error = %reason, zone = %local.zone, "Time zone not recognised, using reported offset");
                Outcome::fallback(local, reason)
            }
            Err((None, reason)) => {
                warn!(error = %reason, "Could not resolve local time, falling back to UTC");
                Outcome::fallback(LocalTime::utc(now), reason)
            }
        }
    }

    async fn lookup_local_time(
        &self,
        location: Coordinate,
        now: DateTime<Utc>,
    ) -> std::result::Result<LocalTime, (Option<LocalTime>, Error)> {
        let response = self
            .api
            .time_zone(location, now.timestamp())
            .await
            .map_err(|e| (None, e))?;

        if response.status != STATUS_OK {
            return Err((
                None,
                Error::api_status(
                    Endpoint::TimeZone,
                    &response.status,
                    response.error_message.as_deref(),
                ),
            ));
        }

        let zone_id = response
            .time_zone_id
            .ok_or((None, Error::NoResults { endpoint: Endpoint::TimeZone }))?;

        match zone_id.parse::<Tz>() {
            Ok(tz) => Ok(LocalTime::in_zone(tz, now)),
            Err(_) => {
                let offset = response
                    .raw_offset
                    .zip(response.dst_offset)
                    .map(|(raw, dst)| raw + dst);
                let local = offset.and_then(|secs| LocalTime::with_offset(zone_id.clone(), secs, now));
                Err((local, Error::UnknownTimeZone(zone_id)))
            }
        }
    }

    pub async fn search_page(&self, request: &PageRequest) -> Result<NearbySearchResponse> {
        let response = self.api.nearby_search(request).await?;

        if response.status != STATUS_OK {
            return Err(Error::api_status(
                Endpoint::NearbySearch,
                &response.status,
                response.error_message.as_deref(),
            ));
        }

        Ok(response)
    }

    /// Open-now flag from a live details lookup. Anything short of an
    /// explicit flag counts as open.
    pub async fn is_open_now(&self, place_id: &str) -> Outcome<bool> {
        let response = match self.api.place_details(place_id).await {
            Ok(response) => response,
            Err(e) => {
                warn!(place_id = place_id, error = %e, "Details lookup failed, assuming open");
                return Outcome::fallback(true, e);
            }
        };

        if response.status != STATUS_OK {
            let err = Error::api_status(
                Endpoint::PlaceDetails,
                &response.status,
                response.error_message.as_deref(),
            );
            warn!(place_id = place_id, error = %err, "Details lookup rejected, assuming open");
            return Outcome::fallback(true, err);
        }

        match response.open_now() {
            Some(open) => Outcome::Resolved(open),
            None => {
                debug!(place_id = place_id, "No opening hours reported, assuming open");
                Outcome::fallback(true, Error::NoResults { endpoint: Endpoint::PlaceDetails })
            }
        }
    }
}

/// ZERO_RESULTS is an ordinary empty answer; everything else is a failure.
pub(crate) fn log_status(status: &str, err: &Error) {
    if status == STATUS_ZERO_RESULTS {
        info!(error = %err, "No results");
    } else {
        error!(error = %err, "API returned an error status");
    }
}
