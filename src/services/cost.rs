//! Running-cost estimate from topology, storage and traffic
//!
//! Unit prices are illustrative cloud list prices, not quotes. Override them by
//! loading a [`PriceTable`] from JSON; keys that are left out keep their
//! defaults.

use crate::models::{Costs, StoragePlan, Throughput, Topology, VolumeEstimate};
use crate::services::volume::DAYS_PER_MONTH;
use serde::{Deserialize, Serialize};

/// Unit prices used by the cost model, in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceTable {
    pub price_per_core_hour: f64,
    pub hours_per_month: f64,
    pub price_per_gb_month: f64,
    /// Flat monthly fee for connectivity, charged whenever data flows.
    pub network_base_fee: f64,
    pub price_per_gb_egress: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            price_per_core_hour: 0.048,
            hours_per_month: 730.0,
            price_per_gb_month: 0.023,
            network_base_fee: 50.0,
            price_per_gb_egress: 0.09,
        }
    }
}

/// Estimate monthly and annual cost.
///
/// A fleet with no devices or no events costs nothing; ratios that would
/// divide by zero are reported as 0.
#[must_use]
pub fn estimate_costs(
    throughput: &Throughput,
    volume: &VolumeEstimate,
    storage: &StoragePlan,
    topology: &Topology,
    prices: &PriceTable,
) -> Costs {
    if throughput.total_devices == 0 || throughput.total_eps <= 0.0 {
        return Costs::default();
    }

    #[allow(clippy::cast_precision_loss)]
    let cores = topology.total_cpu as f64;
    let monthly_gb = volume.daily_gb * DAYS_PER_MONTH;

    let hardware_monthly = cores * prices.price_per_core_hour * prices.hours_per_month;
    let storage_monthly = storage.total_gb * prices.price_per_gb_month;
    let network_monthly = prices.network_base_fee + monthly_gb * prices.price_per_gb_egress;
    let total_monthly = hardware_monthly + storage_monthly + network_monthly;

    #[allow(clippy::cast_precision_loss)]
    let per_device_monthly = total_monthly / throughput.total_devices as f64;
    let per_gb_ingested = if monthly_gb > 0.0 {
        total_monthly / monthly_gb
    } else {
        0.0
    };

    Costs {
        hardware_monthly,
        storage_monthly,
        network_monthly,
        total_monthly,
        total_annual: total_monthly * 12.0,
        per_device_monthly,
        per_gb_ingested,
    }
}
