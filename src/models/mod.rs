mod document;
mod geo;
mod outcome;
mod place;
mod price;
mod query;
mod response;
mod time;

pub use document::{Metadata, ResultDocument};
pub use geo::{Coordinate, EARTH_RADIUS_MILES, METERS_PER_MILE, miles_to_meters, round_to_hundredths};
pub use outcome::Outcome;
pub use place::{PlaceCandidate, Rating, RestaurantResult, sort_by_distance};
pub use price::{PRICE_NOT_AVAILABLE, PriceLevel, price_display};
pub use query::SearchQuery;
pub use response::{
    GeocodeResponse, GeocodeResult, Geometry, NearbySearchResponse, OpeningHours,
    PlaceDetails, PlaceDetailsResponse, STATUS_OK, STATUS_ZERO_RESULTS, TimeZoneResponse,
};
pub use time::LocalTime;
