//! Event-rate to data-volume conversion
//!
//! The conversion assumes an average event footprint of 8 KB once parsed and
//! enriched (125 000 events per GB). Tune [`EVENTS_PER_GB`] to change it; every
//! other stage derives from `daily_gb`.

use crate::models::VolumeEstimate;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Average events stored per decimal gigabyte.
pub const EVENTS_PER_GB: f64 = 125_000.0;

pub const DAYS_PER_WEEK: f64 = 7.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Decimal GB per TB.
pub const GB_PER_TB: f64 = 1000.0;

/// GB/day produced by a sustained event rate.
#[must_use]
pub fn daily_gb(total_eps: f64) -> f64 {
    total_eps * SECONDS_PER_DAY / EVENTS_PER_GB
}

#[must_use]
pub fn estimate_volume(total_eps: f64) -> VolumeEstimate {
    let daily = daily_gb(total_eps);

    VolumeEstimate {
        events_per_day: total_eps * SECONDS_PER_DAY,
        daily_gb: daily,
        weekly_tb: daily * DAYS_PER_WEEK / GB_PER_TB,
        monthly_tb: daily * DAYS_PER_MONTH / GB_PER_TB,
        yearly_tb: daily * DAYS_PER_YEAR / GB_PER_TB,
    }
}
