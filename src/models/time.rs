use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

pub const UTC_LABEL: &str = "UTC";

/// Wall-clock time at the search origin, tagged with the zone it was resolved in.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTime {
    pub zone: String,
    pub time: DateTime<FixedOffset>,
}

impl LocalTime {
    pub fn in_zone(tz: Tz, now: DateTime<Utc>) -> Self {
        Self {
            zone: tz.name().to_string(),
            time: now.with_timezone(&tz).fixed_offset(),
        }
    }

    /// Fixed UTC offset in seconds, as reported alongside an unrecognised zone id.
    pub fn with_offset(zone: impl Into<String>, offset_secs: i64, now: DateTime<Utc>) -> Option<Self> {
        let offset = i32::try_from(offset_secs).ok().and_then(FixedOffset::east_opt)?;
        Some(Self {
            zone: zone.into(),
            time: now.with_timezone(&offset),
        })
    }

    pub fn utc(now: DateTime<Utc>) -> Self {
        Self {
            zone: UTC_LABEL.to_string(),
            time: now.fixed_offset(),
        }
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.time.format("%Y-%m-%d %H:%M:%S"), self.zone)
    }
}
