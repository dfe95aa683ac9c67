pub mod google;
pub mod http;

pub use self::google::GoogleMapsClient;
pub use self::http::HttpClient;
