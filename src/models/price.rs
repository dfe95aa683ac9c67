use std::fmt;

use serde::{Deserialize, Serialize};

pub const PRICE_NOT_AVAILABLE: &str = "Price not available";

/// Upstream price scale, 0 (cheapest) through 4 (most expensive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const MAX: u8 = 4;

    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX).then_some(Self(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn dollar_signs(self) -> String {
        price_display(Some(self.0.into()))
    }
}

impl TryFrom<i64> for PriceLevel {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(PriceLevel::new)
            .ok_or_else(|| format!("price level {value} is outside 0-{}", Self::MAX))
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display string for a numeric level as reported upstream: `$` repeated
/// `level + 1` times for 0-3, `$$$$` for anything else.
pub fn price_display(level: Option<i64>) -> String {
    match level {
        Some(level @ 0..=3) => "$".repeat(level as usize + 1),
        Some(_) => "$$$$".to_string(),
        None => PRICE_NOT_AVAILABLE.to_string(),
    }
}
