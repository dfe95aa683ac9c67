use clap::Parser;

use crate::models::SearchQuery;
use crate::services::{PriceFilter, validate_price_level};

/// Find currently open restaurants near a postal code.
#[derive(Parser, Debug, Clone)]
#[command(name = "restaurant-finder", version, about, long_about = None)]
pub struct SearchArgs {
    /// Postal code to search from
    #[arg(long, value_parser = parse_postal_code)]
    pub zipcode: String,

    /// Search radius in miles
    #[arg(long, value_parser = parse_radius)]
    pub radius: f64,

    /// Cuisine or restaurant type (e.g. mexican, bagels, asian)
    #[arg(long)]
    pub search: Option<String>,

    /// Price level, 0-4 or $ to $$$$$ (0 is least expensive)
    #[arg(long = "price-level", allow_hyphen_values = true)]
    pub price_level: Option<String>,
}

impl SearchArgs {
    pub fn price_filter(&self) -> PriceFilter {
        validate_price_level(self.price_level.as_deref())
    }

    pub fn to_query(&self, price_filter: &PriceFilter) -> SearchQuery {
        SearchQuery::new(self.zipcode.trim(), self.radius)
            .with_keyword(self.search.clone())
            .with_price_level(price_filter.level())
    }
}

fn parse_postal_code(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("postal code must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

fn parse_radius(s: &str) -> Result<f64, String> {
    let miles: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if !miles.is_finite() || miles <= 0.0 {
        return Err(format!("radius must be a positive number of miles, got {s}"));
    }
    Ok(miles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceLevel;

    fn parse(args: &[&str]) -> Result<SearchArgs, clap::Error> {
        SearchArgs::try_parse_from(std::iter::once("restaurant-finder").chain(args.iter().copied()))
    }

    #[test]
    fn zipcode_and_radius_are_required() {
        assert!(parse(&["--radius", "2"]).is_err());
        assert!(parse(&["--zipcode", "10001"]).is_err());
        assert!(parse(&["--zipcode", "", "--radius", "2"]).is_err());
    }

    #[test]
    fn radius_must_be_positive_number() {
        assert!(parse(&["--zipcode", "10001", "--radius", "abc"]).is_err());
        assert!(parse(&["--zipcode", "10001", "--radius", "0"]).is_err());
        assert!(parse(&["--zipcode", "10001", "--radius", "-3"]).is_err());
    }

    #[test]
    fn builds_query_from_all_options() {
        let args = parse(&[
            "--zipcode", "10001", "--radius", "1.5", "--search", "thai", "--price-level", "$$",
        ])
        .unwrap();

        let filter = args.price_filter();
        let query = args.to_query(&filter);
        assert_eq!(query.postal_code, "10001");
        assert_eq!(query.radius_miles, 1.5);
        assert_eq!(query.keyword.as_deref(), Some("thai"));
        assert_eq!(query.price_level, PriceLevel::new(1));
    }

    #[test]
    fn invalid_price_level_does_not_fail_parsing() {
        let args = parse(&["--zipcode", "10001", "--radius", "1", "--price-level", "-2"]).unwrap();
        let filter = args.price_filter();
        assert!(matches!(filter, PriceFilter::Rejected { .. }));
        assert_eq!(args.to_query(&filter).price_level, None);
    }
}
