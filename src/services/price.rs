use tracing::{info, warn};

use crate::models::PriceLevel;

/// Normalised `--price-level` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceFilter {
    Any,
    Exact(PriceLevel),
    Rejected { input: String, reason: String },
}

impl PriceFilter {
    /// Level to filter on. Rejected input filters on nothing.
    pub fn level(&self) -> Option<PriceLevel> {
        match self {
            PriceFilter::Exact(level) => Some(*level),
            PriceFilter::Any | PriceFilter::Rejected { .. } => None,
        }
    }
}

/// Accepts an integer 0-4 or one to five `$` signs (`$` is level 0).
pub fn validate_price_level(input: Option<&str>) -> PriceFilter {
    let filter = parse_price_level(input);
    match &filter {
        PriceFilter::Any => info!("No price level provided, will show all price levels"),
        PriceFilter::Exact(level) => info!(price_level = level.value(), "Using price level (0-4 scale)"),
        PriceFilter::Rejected { input, reason } => {
            warn!(input = %input, reason = %reason, "Ignoring invalid price level, must be 0-4")
        }
    }
    filter
}

fn parse_price_level(input: Option<&str>) -> PriceFilter {
    let Some(raw) = input.filter(|s| !s.trim().is_empty()) else {
        return PriceFilter::Any;
    };

    let rejected = |reason: String| PriceFilter::Rejected {
        input: raw.to_string(),
        reason,
    };

    if raw.chars().all(|c| c == '$') {
        let count = raw.chars().count();
        return match u8::try_from(count - 1).ok().and_then(PriceLevel::new) {
            Some(level) => PriceFilter::Exact(level),
            None => rejected(format!("{count} dollar signs, expected 1 to 5")),
        };
    }

    // Only the numeric form tolerates surrounding whitespace.
    match raw.trim().parse::<i64>() {
        Ok(value) => match PriceLevel::try_from(value) {
            Ok(level) => PriceFilter::Exact(level),
            Err(reason) => rejected(reason),
        },
        Err(e) => rejected(e.to_string()),
    }
}
