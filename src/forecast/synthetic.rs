//! Synthetic fallback wattage.
//!
//! When history holds nothing for a target slot the predictor falls back
//! to a coarse time-of-day band with uniform jitter, so a freshly
//! installed dashboard still renders a plausible daily load curve. The
//! jitter keeps repeated synthetic forecasts from being bit-identical.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Coarse time-of-day segment used for banded default wattage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeOfDayBand {
    /// 23:00-05:00, standby load
    Night,
    /// 05:00-09:00, wake-up peak
    Morning,
    /// 09:00-17:00, background load
    Daytime,
    /// 17:00-23:00, cooking and appliance peak
    Evening,
}

impl TimeOfDayBand {
    /// Band for an hour of day (0-23).
    pub fn for_hour(hour: u32) -> Self {
        match hour % 24 {
            23 | 0..=4 => Self::Night,
            5..=8 => Self::Morning,
            9..=16 => Self::Daytime,
            _ => Self::Evening,
        }
    }

    /// Inclusive wattage range for this band.
    pub fn watts_range(&self) -> (f64, f64) {
        match self {
            Self::Night => (300.0, 400.0),
            Self::Morning => (1200.0, 1500.0),
            Self::Daytime => (800.0, 1000.0),
            Self::Evening => (1500.0, 1800.0),
        }
    }
}

/// Jittered default wattage for an hour with no historical support.
pub fn synthetic_watts<R: Rng>(hour: u32, rng: &mut R) -> f64 {
    let (low, high) = TimeOfDayBand::for_hour(hour).watts_range();
    rng.gen_range(low..=high)
}
