//! CSV inventory import/export against real files

use crate::fixtures::{office_inventory, write_file};
use siemsize::Error;
use siemsize::io::inventory::{read_inventory, render_template, write_inventory};
use siemsize::services::catalog::CATALOG;
use tempfile::TempDir;

#[test]
fn test_inventory_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("devices.csv");
    let devices = office_inventory();

    write_inventory(&path, &devices).unwrap();
    let loaded = read_inventory(&path).unwrap();

    assert_eq!(loaded, devices);
}

#[test]
fn test_blank_lines_and_whitespace_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "devices.csv",
        "DeviceType, Quantity, EPS\n\n firewalls , 4 , 250 \n\nlinuxServers,10,\n",
    )
    .unwrap();

    let devices = read_inventory(&path).unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices["firewalls"].quantity, 4);
    assert_eq!(devices["firewalls"].events_per_second, 250.0);
    assert_eq!(devices["linuxServers"].events_per_second, 15.0);
}

#[test]
fn test_missing_columns_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "bad.csv", "Type,Count\nfirewalls,2\n").unwrap();

    match read_inventory(&path) {
        Err(Error::InvalidInventory { errors }) => {
            assert_eq!(errors, vec!["CSV must have DeviceType and Quantity columns"]);
        }
        other => panic!("expected inventory error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let result = read_inventory("/nonexistent/path/devices.csv");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_template_lists_whole_catalog() {
    let template = render_template();
    let mut lines = template.lines();

    assert_eq!(lines.next(), Some("DeviceType,Quantity,EPS"));
    assert_eq!(lines.count(), CATALOG.len());
    assert!(template.contains("windowsWorkstations,0,3\n"));
}
