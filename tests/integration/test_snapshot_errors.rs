//! Error handling test for invalid/corrupt snapshot files

#[cfg(test)]
mod tests {
    use siemsize::Error;
    use siemsize::io::snapshot::read_snapshot;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn snapshot_with(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_missing_snapshot_file() {
        let result = read_snapshot("/nonexistent/path/to/snapshot.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_corrupt_snapshot_file() {
        let temp_file = snapshot_with("This is not a valid JSON snapshot!");
        let result = read_snapshot(temp_file.path());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_structural_problems_reported_together() {
        let temp_file = snapshot_with(
            r#"{ "version": "latest", "devices": { "servers": { "quantity": -4, "eps": 10 } } }"#,
        );

        let Err(Error::InvalidSnapshot(msg)) = read_snapshot(temp_file.path()) else {
            panic!("expected invalid snapshot");
        };
        assert!(msg.contains("name is required"), "{msg}");
        assert!(msg.contains("Version 'latest'"), "{msg}");
        assert!(msg.contains("device count for servers"), "{msg}");
        assert!(msg.contains("Configuration settings are required"), "{msg}");
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let temp_file = snapshot_with(
            r#"{
                "name": "Broken",
                "version": "1.0",
                "devices": {},
                "configuration": { "retentionPeriod": 0, "replicationFactor": 0 }
            }"#,
        );

        let Err(Error::InvalidSnapshot(msg)) = read_snapshot(temp_file.path()) else {
            panic!("expected invalid snapshot");
        };
        assert!(msg.contains("retention period"), "{msg}");
        assert!(msg.contains("replication factor"), "{msg}");
    }
}
