//! Unit tests for configuration comparison

use crate::fixtures::{inventory, reference_config};
use serde_json::json;
use siemsize::io::snapshot::SavedConfiguration;
use siemsize::services::diff::compare;
use siemsize::{CompressionLevel, Configuration};

#[test]
fn test_identical_configurations() {
    let a = SavedConfiguration::new("a", inventory(&[("firewalls", 2, 500.0)]), reference_config());
    let b = SavedConfiguration::new("b", a.devices.clone(), a.configuration.clone());

    let diff = compare(&a, &b).unwrap();
    assert!(diff.is_empty());
    assert_eq!(diff.summary.total_changes, 0);
}

#[test]
fn test_device_and_setting_changes() {
    let before = SavedConfiguration::new(
        "v1",
        inventory(&[("firewalls", 2, 500.0), ("routers", 4, 300.0)]),
        reference_config(),
    );
    let after = SavedConfiguration::new(
        "v2",
        inventory(&[("firewalls", 3, 500.0), ("routers", 4, 300.0), ("servers", 5, 10.0)]),
        Configuration {
            retention_period: 180,
            compression_level: CompressionLevel::High,
            ..reference_config()
        },
    );

    let diff = compare(&before, &after).unwrap();

    assert_eq!(diff.from, "v1");
    assert_eq!(diff.to, "v2");

    assert_eq!(diff.devices.len(), 2);
    let firewalls = &diff.devices[0];
    assert_eq!(firewalls.device_type, "firewalls");
    assert_eq!((firewalls.old_quantity, firewalls.new_quantity), (2, 3));
    assert_eq!(firewalls.change, 1);
    assert_eq!(firewalls.change_percent, Some(50.0));

    let servers = &diff.devices[1];
    assert_eq!(servers.device_type, "servers");
    assert_eq!(servers.change, 5);
    assert_eq!(servers.change_percent, None);

    let settings: Vec<&str> = diff.settings.iter().map(|s| s.setting.as_str()).collect();
    assert_eq!(settings, vec!["compressionLevel", "retentionPeriod"]);
    assert_eq!(diff.settings[0].old_value, json!("standard"));
    assert_eq!(diff.settings[0].new_value, json!("high"));
    assert_eq!(diff.settings[1].new_value, json!(180));

    assert_eq!(diff.summary.device_changes, 2);
    assert_eq!(diff.summary.setting_changes, 2);
    assert_eq!(diff.summary.total_changes, 4);
}

#[test]
fn test_removed_device_counts_as_decrease() {
    let before = SavedConfiguration::new("v1", inventory(&[("routers", 8, 300.0)]), reference_config());
    let after = SavedConfiguration::new("v2", inventory(&[]), reference_config());

    let diff = compare(&before, &after).unwrap();
    assert_eq!(diff.devices.len(), 1);
    assert_eq!(diff.devices[0].change, -8);
    assert_eq!(diff.devices[0].change_percent, Some(-100.0));
}
