//! Snapshot write/read round-trip test

#[cfg(test)]
mod tests {
    use crate::fixtures::{office_inventory, reference_config};
    use siemsize::compute_sizing;
    use siemsize::io::snapshot::{SNAPSHOT_VERSION, SavedConfiguration, read_snapshot, write_snapshot};
    use siemsize::{ComplianceStandard, Configuration};
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot_path = temp_dir.path().join("nested/dir/office.json");

        let devices = office_inventory();
        let config = Configuration {
            compliance: ComplianceStandard::Soc2,
            retention_period: 365,
            hot_cold_split: true,
            hot_storage_days: 90,
            ..reference_config()
        };
        let result = compute_sizing(&devices, &config);

        let snapshot = SavedConfiguration::new("Head office", devices.clone(), config.clone())
            .with_description("Quarterly review")
            .with_results(result.clone());

        // Write snapshot (parent directories are created)
        let write_result = write_snapshot(&snapshot_path, &snapshot);
        assert!(
            write_result.is_ok(),
            "Failed to write snapshot: {:?}",
            write_result.err()
        );

        // Read snapshot
        let read_back = read_snapshot(&snapshot_path).expect("read snapshot");

        assert_eq!(read_back.name, "Head office");
        assert_eq!(read_back.description.as_deref(), Some("Quarterly review"));
        assert_eq!(read_back.version, SNAPSHOT_VERSION);
        assert!(read_back.exported_at.is_some());
        assert_eq!(read_back.devices, devices);
        assert_eq!(read_back.configuration, config);

        // Stored results are informational; figures survive the trip
        let stored = read_back.results.expect("stored results");
        assert!((stored.storage.total_gb - result.storage.total_gb).abs() < 1e-6);
        assert_eq!(stored.advisories, result.advisories);
    }

    #[test]
    fn test_minimal_snapshot_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("minimal.json");
        std::fs::write(
            &path,
            r#"{
                "name": "Minimal",
                "version": "1.0",
                "devices": { "firewalls": { "quantity": 2, "eps": 500 } },
                "configuration": { "retentionPeriod": 30 }
            }"#,
        )
        .unwrap();

        let snapshot = read_snapshot(&path).unwrap();
        assert_eq!(snapshot.configuration.retention_period, 30);
        assert_eq!(snapshot.configuration.replication_factor, 2);
        assert!(snapshot.exported_at.is_none());
        assert!(snapshot.results.is_none());
    }
}
