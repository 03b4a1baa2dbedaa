//! Unit tests for multi-year growth projection

use crate::fixtures::{assert_close_rel, inventory, reference_config};
use siemsize::services::storage::plan_storage;
use siemsize::{Configuration, compute_sizing};

fn growth_config(rate: f64, years: u8) -> Configuration {
    Configuration {
        include_growth: true,
        annual_growth: rate,
        growth_years: years,
        ..reference_config()
    }
}

#[test]
fn test_growth_disabled_yields_none() {
    let result = compute_sizing(&inventory(&[("servers", 100, 10.0)]), &reference_config());
    assert!(result.growth.is_none());
}

#[test]
fn test_growth_compounds_year_over_year() {
    let devices = inventory(&[("servers", 100, 10.0)]);
    let config = growth_config(20.0, 3);
    let result = compute_sizing(&devices, &config);
    let growth = result.growth.expect("growth projection");

    assert_eq!(growth.len(), 3);
    let years: Vec<u8> = growth.iter().map(|g| g.year).collect();
    assert_eq!(years, vec![1, 2, 3]);

    let devices: Vec<u64> = growth.iter().map(|g| g.devices).collect();
    assert_eq!(devices, vec![120, 144, 173]);

    assert_close_rel(growth[0].total_eps, 1_200.0);
    assert_close_rel(growth[1].total_eps, 1_440.0);
    assert_close_rel(growth[2].total_eps, 1_728.0);

    for pair in growth.windows(2) {
        assert_close_rel(pair[1].daily_gb, pair[0].daily_gb * 1.2);
    }
}

#[test]
fn test_growth_storage_reuses_storage_plan() {
    let devices = inventory(&[("servers", 100, 10.0)]);
    let config = Configuration {
        hot_cold_split: true,
        ..growth_config(15.0, 2)
    };
    let growth = compute_sizing(&devices, &config).growth.unwrap();

    for year in &growth {
        assert_close_rel(year.storage_tb, plan_storage(year.daily_gb, &config).total_tb());
    }
}

#[test]
fn test_zero_growth_is_flat() {
    let devices = inventory(&[("servers", 100, 10.0)]);
    let result = compute_sizing(&devices, &growth_config(0.0, 1));
    let growth = result.growth.as_ref().unwrap();

    assert_eq!(growth.len(), 1);
    assert_eq!(growth[0].devices, 100);
    assert_close_rel(growth[0].daily_gb, result.volume.daily_gb);
    assert_close_rel(growth[0].storage_tb, result.total_storage_tb());
}
