//! JSON snapshot read/write operations
//!
//! A snapshot bundles a named device inventory and configuration, optionally
//! with the result computed from them, so a sizing session can be exported,
//! shared and reloaded. Stored results are informational only; callers should
//! recompute from `devices` and `configuration`.

use crate::models::{inventory_violations, Configuration, DeviceInventory, SizingResult};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Format version written by this crate.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// A saved sizing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfiguration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    pub devices: DeviceInventory,
    pub configuration: Configuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<SizingResult>,
}

impl SavedConfiguration {
    /// New snapshot stamped with the current time.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        devices: DeviceInventory,
        configuration: Configuration,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: SNAPSHOT_VERSION.to_string(),
            exported_at: Some(Utc::now()),
            devices,
            configuration,
            results: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_results(mut self, results: SizingResult) -> Self {
        self.results = Some(results);
        self
    }
}

fn is_version(version: &str) -> bool {
    let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    version
        .split_once('.')
        .is_some_and(|(major, minor)| is_number(major) && is_number(minor))
}

fn device_problems(devices: &serde_json::Map<String, Value>) -> Vec<String> {
    let mut problems = Vec::new();

    for (device_type, entry) in devices {
        let Some(entry) = entry.as_object() else {
            problems.push(format!("Invalid device entry for {device_type}: must be an object"));
            continue;
        };

        if !entry.get("quantity").is_some_and(Value::is_u64) {
            problems.push(format!(
                "Invalid device count for {device_type}: must be a non-negative integer"
            ));
        }

        let eps = entry.get("eps").or_else(|| entry.get("eventsPerSecond"));
        if !eps.and_then(Value::as_f64).is_some_and(|v| v >= 0.0) {
            problems.push(format!(
                "Invalid events per second for {device_type}: must be a non-negative number"
            ));
        }
    }

    problems
}

/// Check the structure of a parsed snapshot document.
///
/// Returns every problem found so the user can fix them in one pass.
#[must_use]
pub fn validate_snapshot(doc: &Value) -> Vec<String> {
    let mut problems = Vec::new();

    let Some(root) = doc.as_object() else {
        return vec!["Snapshot must be a JSON object".to_string()];
    };

    match root.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => {}
        _ => problems.push("Configuration name is required".to_string()),
    }

    match root.get("version").and_then(Value::as_str) {
        None => problems.push("Version is required".to_string()),
        Some(version) if !is_version(version) => {
            problems.push(format!("Version '{version}' must look like <major>.<minor>"));
        }
        Some(_) => {}
    }

    match root.get("devices") {
        None => problems.push("Device inventory is required".to_string()),
        Some(Value::Object(devices)) => problems.extend(device_problems(devices)),
        Some(_) => problems.push("Device inventory must be an object".to_string()),
    }

    match root.get("configuration") {
        None => problems.push("Configuration settings are required".to_string()),
        Some(Value::Object(_)) => {}
        Some(_) => problems.push("Configuration settings must be an object".to_string()),
    }

    problems
}

/// Write a snapshot as pretty-printed JSON, creating parent directories.
pub fn write_snapshot<P: AsRef<Path>>(path: P, snapshot: &SavedConfiguration) -> Result<()> {
    let file_path = path.as_ref();

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::debug!("Wrote snapshot '{}' to {}", snapshot.name, file_path.display());
    Ok(())
}

/// Read and validate a snapshot.
///
/// # Errors
/// [`Error::Io`] when the file cannot be read, [`Error::Json`] when it is not
/// JSON, and [`Error::InvalidSnapshot`] listing every structural or
/// configuration problem otherwise.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<SavedConfiguration> {
    let file = File::open(path.as_ref())?;
    let doc: Value = serde_json::from_reader(BufReader::new(file))?;
    parse_snapshot(doc)
}

/// Stored results are only informational; a stale or foreign shape is
/// discarded instead of failing the load.
fn drop_unreadable_results(doc: &mut Value) {
    let Some(root) = doc.as_object_mut() else {
        return;
    };
    let unreadable = match root.get("results") {
        None | Some(Value::Null) => return,
        Some(results) => SizingResult::deserialize(results).err(),
    };
    if let Some(e) = unreadable {
        log::warn!("Ignoring stored results that do not match the current format: {e}");
        root.remove("results");
    }
}

/// Validate and convert an already parsed document.
pub fn parse_snapshot(mut doc: Value) -> Result<SavedConfiguration> {
    let problems = validate_snapshot(&doc);
    if !problems.is_empty() {
        return Err(Error::InvalidSnapshot(problems.join("; ")));
    }

    drop_unreadable_results(&mut doc);

    let snapshot: SavedConfiguration =
        serde_json::from_value(doc).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;

    let mut problems = snapshot.configuration.violations();
    problems.extend(inventory_violations(&snapshot.devices));
    if !problems.is_empty() {
        return Err(Error::InvalidSnapshot(problems.join("; ")));
    }

    if snapshot.version != SNAPSHOT_VERSION {
        log::warn!(
            "Snapshot version {} differs from {}; loading anyway",
            snapshot.version,
            SNAPSHOT_VERSION
        );
    }

    Ok(snapshot)
}
