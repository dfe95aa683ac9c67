pub mod api;
pub mod finder;
pub mod price;
pub mod recommend;
pub mod search;

pub use api::{ApiService, PageRequest, PlacesApi};
pub use finder::{RestaurantFinder, SearchReport};
pub use price::{PriceFilter, validate_price_level};
pub use recommend::{GOOD_RATING, recommend, recommend_another};
pub use search::{SearchPages, search_nearby};
