//! Side-by-side comparison of two saved configurations

use crate::io::snapshot::SavedConfiguration;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Quantity change for one device type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceChange {
    pub device_type: String,
    pub old_quantity: u64,
    pub new_quantity: u64,
    pub change: i64,
    /// `None` when the old quantity was zero.
    pub change_percent: Option<f64>,
}

/// One configuration setting that differs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingChange {
    pub setting: String,
    pub old_value: Value,
    pub new_value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub device_changes: usize,
    pub setting_changes: usize,
    pub total_changes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationDiff {
    pub from: String,
    pub to: String,
    pub devices: Vec<DeviceChange>,
    pub settings: Vec<SettingChange>,
    pub summary: DiffSummary,
}

impl ConfigurationDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.total_changes == 0
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn device_change(device_type: &str, old_quantity: u64, new_quantity: u64) -> DeviceChange {
    let change = new_quantity as i64 - old_quantity as i64;
    let change_percent = (old_quantity > 0).then(|| change as f64 / old_quantity as f64 * 100.0);

    DeviceChange {
        device_type: device_type.to_string(),
        old_quantity,
        new_quantity,
        change,
        change_percent,
    }
}

fn setting_changes(a: &Value, b: &Value) -> Vec<SettingChange> {
    let empty = serde_json::Map::new();
    let a = a.as_object().unwrap_or(&empty);
    let b = b.as_object().unwrap_or(&empty);

    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    keys.into_iter()
        .filter_map(|key| {
            let old_value = a.get(key).cloned().unwrap_or(Value::Null);
            let new_value = b.get(key).cloned().unwrap_or(Value::Null);
            (old_value != new_value).then(|| SettingChange {
                setting: key.clone(),
                old_value,
                new_value,
            })
        })
        .collect()
}

/// Compare `a` (before) against `b` (after).
///
/// Device types missing on one side count as quantity 0. Settings are
/// compared through their JSON form so every serialized knob participates.
pub fn compare(a: &SavedConfiguration, b: &SavedConfiguration) -> crate::Result<ConfigurationDiff> {
    let device_types: BTreeSet<&String> = a.devices.keys().chain(b.devices.keys()).collect();

    let devices: Vec<DeviceChange> = device_types
        .into_iter()
        .filter_map(|device_type| {
            let old = a.devices.get(device_type).map_or(0, |e| e.quantity);
            let new = b.devices.get(device_type).map_or(0, |e| e.quantity);
            (old != new).then(|| device_change(device_type, old, new))
        })
        .collect();

    let settings = setting_changes(
        &serde_json::to_value(&a.configuration)?,
        &serde_json::to_value(&b.configuration)?,
    );

    log::debug!(
        "Compared '{}' and '{}': {} device change(s), {} setting change(s)",
        a.name,
        b.name,
        devices.len(),
        settings.len()
    );

    let summary = DiffSummary {
        device_changes: devices.len(),
        setting_changes: settings.len(),
        total_changes: devices.len() + settings.len(),
    };

    Ok(ConfigurationDiff {
        from: a.name.clone(),
        to: b.name.clone(),
        devices,
        settings,
        summary,
    })
}
