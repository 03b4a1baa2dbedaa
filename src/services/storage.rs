//! Storage planning: compression, replication, indexing overhead and tiering
//!
//! ```text
//! raw         = daily_gb * retention
//! compressed  = raw * compression_factor
//! replicated  = compressed * replication_factor
//! total       = replicated * INDEXING_OVERHEAD
//! ```
//!
//! With hot/cold tiering the hot window keeps the configured replication and
//! the cold window is stored once ([`COLD_TIER_REPLICATION`]). Cold archives
//! are assumed to sit on durable object storage, so extra copies only add cost.

use crate::models::{Configuration, RetentionHorizon, StoragePlan, TieredStorage};
use crate::services::volume::GB_PER_TB;

/// Index structures and metadata on top of compressed data.
pub const INDEXING_OVERHEAD: f64 = 1.2;

/// Replication applied to the cold tier regardless of configuration.
pub const COLD_TIER_REPLICATION: u32 = 1;

/// Fixed comparison horizons, independent of the configured retention.
pub const RETENTION_HORIZONS: [u32; 4] = [30, 90, 180, 365];

fn window_gb(daily_gb: f64, days: u32, compression: f64, replication: u32) -> f64 {
    daily_gb * f64::from(days) * compression * f64::from(replication)
}

/// Plan storage for the configured retention window.
#[must_use]
pub fn plan_storage(daily_gb: f64, config: &Configuration) -> StoragePlan {
    let retention = config.retention_period;
    let compression = config.compression_level.factor();

    let raw_gb = daily_gb * f64::from(retention);
    let compressed_gb = raw_gb * compression;

    if !config.hot_cold_split {
        let replicated_gb = compressed_gb * f64::from(config.replication_factor);
        return StoragePlan {
            retention_days: retention,
            raw_gb,
            compressed_gb,
            replicated_gb,
            total_gb: replicated_gb * INDEXING_OVERHEAD,
            tiers: None,
            hot_days_clamped: false,
        };
    }

    let hot_days_clamped = config.hot_storage_days > retention;
    if hot_days_clamped {
        log::warn!(
            "Hot storage window of {} days exceeds retention of {retention} days; clamping",
            config.hot_storage_days
        );
    }

    let hot_days = config.hot_storage_days.min(retention);
    let cold_days = retention - hot_days;

    let hot_replicated = window_gb(daily_gb, hot_days, compression, config.replication_factor);
    let cold_replicated = window_gb(daily_gb, cold_days, compression, COLD_TIER_REPLICATION);

    let hot_gb = hot_replicated * INDEXING_OVERHEAD;
    let cold_gb = cold_replicated * INDEXING_OVERHEAD;

    StoragePlan {
        retention_days: retention,
        raw_gb,
        compressed_gb,
        replicated_gb: hot_replicated + cold_replicated,
        total_gb: hot_gb + cold_gb,
        tiers: Some(TieredStorage {
            hot_days,
            cold_days,
            hot_gb,
            cold_gb,
        }),
        hot_days_clamped,
    }
}

/// Storage at each of [`RETENTION_HORIZONS`], untiered.
#[must_use]
pub fn storage_by_retention(daily_gb: f64, config: &Configuration) -> Vec<RetentionHorizon> {
    RETENTION_HORIZONS
        .iter()
        .map(|&days| {
            let raw_gb = daily_gb * f64::from(days);
            let total_gb = window_gb(
                daily_gb,
                days,
                config.compression_level.factor(),
                config.replication_factor,
            ) * INDEXING_OVERHEAD;
            RetentionHorizon {
                days,
                raw_tb: raw_gb / GB_PER_TB,
                total_tb: total_gb / GB_PER_TB,
            }
        })
        .collect()
}
