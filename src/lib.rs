//! SIEM/XDR Infrastructure Sizing Library
//!
//! This library turns a device inventory and a handful of sizing knobs into
//! event-rate, storage, topology, growth and cost estimates, plus a list of
//! advisories. Every stage is a pure function of its inputs, so the same
//! inputs always produce the same [`SizingResult`].

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{
    Advisory, AdvisoryKind, ComplianceStandard, CompressionLevel, Configuration, DeviceEntry,
    DeviceInventory, SizingResult,
};
pub use services::cost::PriceTable;

use services::advisory::AdvisoryContext;
use std::result;

/// Custom error type for the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("Invalid inventory: {}", errors.join("; "))]
    InvalidInventory { errors: Vec<String> },
}

pub type Result<T> = result::Result<T, Error>;

/// Size a deployment with the default unit prices.
///
/// Never fails: out-of-range inputs still produce a result, with the problem
/// reported through the advisory list where it matters. Use
/// [`size_deployment`] to reject malformed input up front.
#[must_use]
pub fn compute_sizing(devices: &DeviceInventory, config: &Configuration) -> SizingResult {
    compute_sizing_with_prices(devices, config, &PriceTable::default())
}

/// Size a deployment with caller-supplied unit prices.
#[must_use]
pub fn compute_sizing_with_prices(
    devices: &DeviceInventory,
    config: &Configuration,
    prices: &PriceTable,
) -> SizingResult {
    let throughput = services::aggregate::aggregate(devices, config.peak_factor);
    log::debug!(
        "Aggregated {} devices: {:.2} EPS (peak {:.2})",
        throughput.total_devices,
        throughput.total_eps,
        throughput.peak_eps
    );

    let volume = services::volume::estimate_volume(throughput.total_eps);
    log::debug!("Estimated {:.2} GB/day", volume.daily_gb);

    let storage = services::storage::plan_storage(volume.daily_gb, config);
    let storage_by_retention = services::storage::storage_by_retention(volume.daily_gb, config);
    log::debug!(
        "Planned {:.2} GB over {} days",
        storage.total_gb,
        storage.retention_days
    );

    let topology = services::topology::size_topology(&throughput);
    let architecture = services::architecture::classify(throughput.total_devices);
    log::debug!(
        "Selected {} with {} instances",
        architecture.kind,
        topology.total_instances()
    );

    let growth = services::growth::project_growth(&throughput, &volume, config);
    let costs = services::cost::estimate_costs(&throughput, &volume, &storage, &topology, prices);
    log::debug!("Estimated ${:.2}/month", costs.total_monthly);

    let advisories = services::advisory::evaluate(&AdvisoryContext {
        throughput: &throughput,
        storage: &storage,
        topology: &topology,
        config,
    });
    log::debug!("Raised {} advisories", advisories.len());

    SizingResult {
        throughput,
        volume,
        storage,
        storage_by_retention,
        topology,
        architecture,
        growth,
        costs,
        advisories,
    }
}

/// Validate the inputs, then size the deployment.
///
/// # Errors
/// Returns [`Error::InvalidInput`] listing every problem found in the
/// configuration and inventory.
pub fn size_deployment(
    devices: &DeviceInventory,
    config: &Configuration,
    prices: &PriceTable,
) -> Result<SizingResult> {
    let mut problems = config.violations();
    problems.extend(models::inventory_violations(devices));

    if !problems.is_empty() {
        return Err(Error::InvalidInput(problems.join("; ")));
    }

    Ok(compute_sizing_with_prices(devices, config, prices))
}
