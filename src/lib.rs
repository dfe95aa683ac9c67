pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod services;
pub mod storage;
pub mod utils;

pub use app::{RunOutcome, run};
pub use clients::GoogleMapsClient;
pub use config::{ApiKey, Settings};
pub use error::{Error, Result};
pub use services::{PlacesApi, RestaurantFinder};
pub use storage::JsonExporter;
pub use utils::{Delay, TokioDelay};
