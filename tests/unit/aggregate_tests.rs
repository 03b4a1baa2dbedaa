//! Unit tests for fleet aggregation

use crate::fixtures::{assert_close, inventory, office_inventory};
use siemsize::DeviceInventory;
use siemsize::services::aggregate::{SortBy, aggregate, eps_share, top_sources};

#[test]
fn test_aggregate_sums_lines() {
    let throughput = aggregate(&office_inventory(), 1.3);

    assert_eq!(throughput.total_devices, 1_450);
    assert_close(throughput.total_eps, 22_500.0);
    assert_close(throughput.peak_eps, 29_250.0);
}

#[test]
fn test_aggregate_empty_inventory() {
    let throughput = aggregate(&DeviceInventory::new(), 1.3);

    assert_eq!(throughput.total_devices, 0);
    assert_eq!(throughput.total_eps, 0.0);
    assert_eq!(throughput.peak_eps, 0.0);
}

#[test]
fn test_peak_factor_of_one_keeps_average() {
    let throughput = aggregate(&office_inventory(), 1.0);
    assert_eq!(throughput.peak_eps, throughput.total_eps);
}

#[test]
fn test_top_sources_by_eps() {
    let devices = office_inventory();
    let top = top_sources(&devices, SortBy::Eps, Some(2));

    let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["firewalls", "switches"]);
}

#[test]
fn test_top_sources_by_quantity_skips_empty_lines() {
    let devices = inventory(&[("routers", 0, 300.0), ("servers", 12, 10.0), ("laptops", 40, 2.0)]);
    let top = top_sources(&devices, SortBy::Quantity, None);

    let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["laptops", "servers"]);
}

#[test]
fn test_eps_share() {
    let devices = office_inventory();
    let total = aggregate(&devices, 1.3).total_eps;

    assert_close(eps_share(&devices["firewalls"], total), 10_000.0 / 22_500.0);
    assert_eq!(eps_share(&devices["firewalls"], 0.0), 0.0);
}

#[test]
fn test_sort_labels() {
    assert_eq!(SortBy::from_label("EPS"), Some(SortBy::Eps));
    assert_eq!(SortBy::from_label("count"), Some(SortBy::Quantity));
    assert_eq!(SortBy::from_label("size"), None);
}
