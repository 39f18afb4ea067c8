use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

/// One normalized energy measurement.
///
/// Raw readings arrive with arbitrary field naming and timestamps; the
/// normalizer reduces each to the local hour of day, the day of week
/// (0 = Sunday) and a non-negative power draw in watts. This is the only
/// shape the rest of the pipeline sees.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedReading {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Day of week (0 = Sunday, 6 = Saturday)
    pub day_of_week: u32,
    /// Power draw in watts, clamped to >= 0
    pub watts: f64,
}

impl NormalizedReading {
    /// Create a reading, clamping negative wattage to zero.
    pub fn new(hour: u32, day_of_week: u32, watts: f64) -> Self {
        Self {
            hour: hour % 24,
            day_of_week: day_of_week % 7,
            watts: watts.max(0.0),
        }
    }

    /// Derive hour and day-of-week from a timestamp.
    pub fn from_timestamp(timestamp: DateTime<FixedOffset>, watts: f64) -> Self {
        Self::new(
            timestamp.hour(),
            timestamp.weekday().num_days_from_sunday(),
            watts,
        )
    }

    /// True when this reading falls in the target hour slot.
    pub fn matches_hour(&self, hour: u32) -> bool {
        self.hour == hour
    }

    /// True when this reading shares both hour and day-of-week with the target.
    pub fn matches_pattern(&self, hour: u32, day_of_week: u32) -> bool {
        self.hour == hour && self.day_of_week == day_of_week
    }
}
