//! End-to-end sizing through the public API

use crate::fixtures::{
    assert_close, inventory, office_inventory, reference_config, reference_inventory,
};
use siemsize::models::ArchitectureKind;
use siemsize::{AdvisoryKind, CompressionLevel, Configuration, DeviceInventory, compute_sizing};

#[test]
fn test_reference_deployment() {
    let result = compute_sizing(&reference_inventory(), &reference_config());

    assert_eq!(result.throughput.total_devices, 2);
    assert_close(result.throughput.total_eps, 1000.0);
    assert_close(result.throughput.peak_eps, 1300.0);

    assert_close(result.volume.events_per_day, 86_400_000.0);
    assert_close(result.volume.daily_gb, 691.2);
    assert_close(result.volume.yearly_tb, 252.288);

    assert_eq!(result.storage.retention_days, 90);
    assert_close(result.storage.raw_gb, 62_208.0);
    assert_close(result.storage.compressed_gb, 37_324.8);
    assert_close(result.storage.replicated_gb, 74_649.6);
    assert_close(result.storage.total_gb, 89_579.52);
    assert!((result.total_storage_tb() - 89.58).abs() < 0.01);

    assert_eq!(result.architecture.kind, ArchitectureKind::SingleNode);
    assert!(result.growth.is_none());

    assert_eq!(result.advisories.len(), 1, "{:?}", result.advisories);
    assert_eq!(result.advisories[0].kind, AdvisoryKind::Success);
}

#[test]
fn test_sizing_is_deterministic() {
    let devices = office_inventory();
    let config = Configuration {
        hot_cold_split: true,
        include_growth: true,
        ..reference_config()
    };

    let first = compute_sizing(&devices, &config);
    let second = compute_sizing(&devices, &config);
    assert_eq!(first, second);
}

#[test]
fn test_zero_devices() {
    let result = compute_sizing(&DeviceInventory::new(), &reference_config());

    assert_eq!(result.throughput.total_devices, 0);
    assert_eq!(result.throughput.total_eps, 0.0);
    assert_eq!(result.volume.daily_gb, 0.0);
    assert_eq!(result.storage.total_gb, 0.0);
    assert_eq!(result.costs.total_monthly, 0.0);
    assert_eq!(result.costs.per_device_monthly, 0.0);
    assert_eq!(result.architecture.kind, ArchitectureKind::SingleNode);
    assert_eq!(result.topology.data_indexer.instances, 1);

    assert!(result.has_errors());
    assert_eq!(result.advisories.len(), 1);
    assert_eq!(result.advisories[0].title, "No devices configured");
}

#[test]
fn test_devices_without_events() {
    let devices = inventory(&[("printers", 40, 0.0)]);
    let result = compute_sizing(&devices, &reference_config());

    assert_eq!(result.throughput.total_devices, 40);
    assert_eq!(result.storage.total_gb, 0.0);
    assert_eq!(result.costs.total_monthly, 0.0);
    assert!(!result.has_errors());
    assert_eq!(result.advisories_of(AdvisoryKind::Warning).count(), 1);
    assert_eq!(result.advisories_of(AdvisoryKind::Success).count(), 0);
}

#[test]
fn test_storage_grows_with_retention_and_replication() {
    let devices = office_inventory();

    let mut previous = 0.0;
    for retention in [30, 90, 180, 365] {
        let config = Configuration {
            retention_period: retention,
            ..reference_config()
        };
        let total = compute_sizing(&devices, &config).storage.total_gb;
        assert!(total > previous, "retention {retention}: {total} <= {previous}");
        previous = total;
    }

    let single = compute_sizing(
        &devices,
        &Configuration {
            replication_factor: 1,
            ..reference_config()
        },
    );
    let triple = compute_sizing(
        &devices,
        &Configuration {
            replication_factor: 3,
            ..reference_config()
        },
    );
    assert_close(triple.storage.total_gb, single.storage.total_gb * 3.0);
}

#[test]
fn test_more_devices_means_more_volume() {
    let mut previous = compute_sizing(&reference_inventory(), &reference_config());
    for quantity in [3, 10, 250] {
        let devices = inventory(&[("firewalls", quantity, 500.0)]);
        let current = compute_sizing(&devices, &reference_config());

        assert!(current.throughput.total_eps > previous.throughput.total_eps, "{quantity}");
        assert!(current.volume.daily_gb > previous.volume.daily_gb, "{quantity}");
        assert!(current.total_storage_tb() > previous.total_storage_tb(), "{quantity}");
        previous = current;
    }
}

#[test]
fn test_compression_ordering() {
    let devices = office_inventory();
    let total = |level| {
        let config = Configuration {
            compression_level: level,
            ..reference_config()
        };
        compute_sizing(&devices, &config).storage.total_gb
    };

    let none = total(CompressionLevel::None);
    let standard = total(CompressionLevel::Standard);
    let high = total(CompressionLevel::High);
    assert!(none > standard && standard > high);
}

#[test]
fn test_hot_cold_split_conserves_unreplicated_total() {
    let devices = office_inventory();
    let untiered = Configuration {
        replication_factor: 1,
        ..reference_config()
    };
    let tiered = Configuration {
        hot_cold_split: true,
        hot_storage_days: 30,
        ..untiered.clone()
    };

    let flat = compute_sizing(&devices, &untiered).storage;
    let split = compute_sizing(&devices, &tiered).storage;
    let tiers = split.tiers.expect("tiered plan");

    assert_eq!(tiers.hot_days + tiers.cold_days, 90);
    assert_close(tiers.hot_gb + tiers.cold_gb, split.total_gb);
    assert!((split.total_gb - flat.total_gb).abs() < 1e-6 * flat.total_gb);
}

#[test]
fn test_hot_days_beyond_retention_are_clamped() {
    let config = Configuration {
        retention_period: 30,
        hot_cold_split: true,
        hot_storage_days: 60,
        ..reference_config()
    };
    let result = compute_sizing(&reference_inventory(), &config);

    let tiers = result.storage.tiers.expect("tiered plan");
    assert_eq!(tiers.hot_days, 30);
    assert_eq!(tiers.cold_days, 0);
    assert!(result.storage.hot_days_clamped);
    assert!(result
        .advisories
        .iter()
        .any(|a| a.title == "Hot storage longer than retention"));
}

#[test]
fn test_horizon_table_is_fixed() {
    let result = compute_sizing(&reference_inventory(), &reference_config());
    let days: Vec<u32> = result.storage_by_retention.iter().map(|h| h.days).collect();
    assert_eq!(days, vec![30, 90, 180, 365]);

    let ninety = &result.storage_by_retention[1];
    assert!((ninety.total_tb - result.total_storage_tb()).abs() < 1e-9);
}

#[test]
fn test_mid_size_fleet() {
    let result = compute_sizing(&office_inventory(), &reference_config());

    assert_eq!(result.throughput.total_devices, 1_450);
    assert_close(result.throughput.total_eps, 22_500.0);
    assert_eq!(result.architecture.kind, ArchitectureKind::MediumCluster);
    assert_eq!(result.topology.data_indexer.instances, 3);
}
