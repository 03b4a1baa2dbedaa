//! Test fixtures for deterministic sizing inputs
#![allow(dead_code)]

use siemsize::{Configuration, DeviceEntry, DeviceInventory};
use std::fs;
use std::path::{Path, PathBuf};

/// Float tolerance for values derived through a handful of multiplications.
pub const EPSILON: f64 = 1e-6;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Relative comparison for values compounded over several steps.
pub fn assert_close_rel(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        ((actual - expected) / scale).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn inventory(lines: &[(&str, u64, f64)]) -> DeviceInventory {
    lines
        .iter()
        .map(|(name, quantity, eps)| ((*name).to_string(), DeviceEntry::new(*quantity, *eps)))
        .collect()
}

/// Two firewalls at 500 EPS each: exactly 1000 EPS.
pub fn reference_inventory() -> DeviceInventory {
    inventory(&[("firewalls", 2, 500.0)])
}

/// A mixed mid-size fleet (1,450 devices).
pub fn office_inventory() -> DeviceInventory {
    inventory(&[
        ("windowsWorkstations", 1_000, 3.0),
        ("linuxServers", 300, 15.0),
        ("firewalls", 50, 200.0),
        ("switches", 100, 50.0),
    ])
}

/// 90 days, standard compression, replication 2, no tiering.
pub fn reference_config() -> Configuration {
    Configuration::default()
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}
