//! Input validation through the checked entry point

use crate::fixtures::{inventory, reference_config, reference_inventory};
use siemsize::{Configuration, Error, PriceTable, size_deployment};

fn invalid_input_message(result: siemsize::Result<siemsize::SizingResult>) -> String {
    match result {
        Err(Error::InvalidInput(msg)) => msg,
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn test_valid_input_is_sized() {
    let result = size_deployment(&reference_inventory(), &reference_config(), &PriceTable::default());
    assert!(result.is_ok());
}

#[test]
fn test_zero_retention_and_replication_rejected() {
    let config = Configuration {
        retention_period: 0,
        replication_factor: 0,
        ..reference_config()
    };
    let msg = invalid_input_message(size_deployment(
        &reference_inventory(),
        &config,
        &PriceTable::default(),
    ));

    assert!(msg.contains("retention period"));
    assert!(msg.contains("replication factor"));
}

#[test]
fn test_hot_days_beyond_retention_rejected() {
    let config = Configuration {
        retention_period: 30,
        hot_cold_split: true,
        hot_storage_days: 60,
        ..reference_config()
    };
    let msg = invalid_input_message(size_deployment(
        &reference_inventory(),
        &config,
        &PriceTable::default(),
    ));
    assert!(msg.contains("hot storage days (60)"));
}

#[test]
fn test_bad_peak_and_growth_rejected() {
    let config = Configuration {
        peak_factor: 0.5,
        include_growth: true,
        annual_growth: -5.0,
        growth_years: 4,
        ..reference_config()
    };
    let msg = invalid_input_message(size_deployment(
        &reference_inventory(),
        &config,
        &PriceTable::default(),
    ));

    assert!(msg.contains("peak factor"));
    assert!(msg.contains("annual growth"));
    assert!(msg.contains("1 to 3 years"));
}

#[test]
fn test_negative_eps_rejected() {
    let devices = inventory(&[("firewalls", 2, -1.0), ("routers", 1, f64::NAN)]);
    let msg = invalid_input_message(size_deployment(
        &devices,
        &reference_config(),
        &PriceTable::default(),
    ));

    assert!(msg.contains("firewalls"));
    assert!(msg.contains("routers"));
}
