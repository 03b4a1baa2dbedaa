//! Multi-year growth projection

use crate::models::{Configuration, GrowthYear, Throughput, VolumeEstimate};
use crate::services::storage::plan_storage;

/// Compound devices, EPS, daily volume and storage over the configured horizon.
///
/// Each year is derived from the previous one, so year `n + 1` is exactly year
/// `n × (1 + rate / 100)`. Storage reapplies the full storage plan to the
/// projected volume with the original retention policy.
///
/// Returns `None` when growth projection is disabled.
#[must_use]
pub fn project_growth(
    throughput: &Throughput,
    volume: &VolumeEstimate,
    config: &Configuration,
) -> Option<Vec<GrowthYear>> {
    if !config.include_growth {
        return None;
    }

    let rate = 1.0 + config.annual_growth / 100.0;
    let years = config.growth_years.clamp(1, Configuration::MAX_GROWTH_YEARS);

    #[allow(clippy::cast_precision_loss)]
    let mut devices = throughput.total_devices as f64;
    let mut total_eps = throughput.total_eps;
    let mut daily_gb = volume.daily_gb;
    let mut projection = Vec::with_capacity(usize::from(years));

    for year in 1..=years {
        devices *= rate;
        total_eps *= rate;
        daily_gb *= rate;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let projected_devices = devices.round() as u64;

        projection.push(GrowthYear {
            year,
            devices: projected_devices,
            total_eps,
            daily_gb,
            storage_tb: plan_storage(daily_gb, config).total_tb(),
        });
    }

    log::debug!(
        "Projected {years} year(s) at {}% annual growth",
        config.annual_growth
    );

    Some(projection)
}
