//! Contract test for the saved snapshot document

use crate::fixtures::{reference_config, reference_inventory};
use serde_json::Value;
use siemsize::io::snapshot::{SavedConfiguration, write_snapshot};
use tempfile::TempDir;

#[test]
fn test_snapshot_document_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lab.json");

    let snapshot = SavedConfiguration::new("Lab", reference_inventory(), reference_config());
    write_snapshot(&path, &snapshot).unwrap();

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(doc["name"], "Lab");
    assert_eq!(doc["version"], "1.0");
    assert!(doc["exportedAt"].is_string());
    assert_eq!(doc["devices"]["firewalls"]["quantity"], 2);
    assert_eq!(doc["devices"]["firewalls"]["eps"], 500.0);
    assert_eq!(doc["configuration"]["retentionPeriod"], 90);
    assert_eq!(doc["configuration"]["compressionLevel"], "standard");
    assert_eq!(doc["configuration"]["compliance"], "NONE");
    assert!(doc.get("description").is_none());
    assert!(doc.get("results").is_none());
}
