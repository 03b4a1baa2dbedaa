//! CSV device inventory import/export
//!
//! Format: a header row naming at least `DeviceType` and `Quantity` (any case,
//! any order) and optionally `EPS`, followed by one row per device type.
//! Rows without an EPS value take the catalog default for that type, or 0 for
//! unknown types.

use crate::models::{DeviceEntry, DeviceInventory};
use crate::services::catalog::{self, CATALOG};
use crate::{Error, Result};
use std::fmt::Write as _;
use std::path::Path;

pub const CSV_HEADER: &str = "DeviceType,Quantity,EPS";

struct Columns {
    device_type: usize,
    quantity: usize,
    eps: Option<usize>,
}

fn parse_header(line: &str) -> Option<Columns> {
    let header: Vec<String> = line.split(',').map(|h| h.trim().to_ascii_lowercase()).collect();
    let position = |name: &str| header.iter().position(|h| h == name);

    Some(Columns {
        device_type: position("devicetype")?,
        quantity: position("quantity")?,
        eps: position("eps"),
    })
}

/// Parse CSV text into an inventory.
///
/// # Errors
/// [`Error::InvalidInventory`] carrying one message per bad row (numbered as
/// in the file), or a single message for a missing/invalid header.
pub fn parse_inventory(text: &str) -> Result<DeviceInventory> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(Error::InvalidInventory {
            errors: vec!["CSV file is empty".to_string()],
        });
    };

    let Some(columns) = parse_header(header) else {
        return Err(Error::InvalidInventory {
            errors: vec!["CSV must have DeviceType and Quantity columns".to_string()],
        });
    };

    let mut devices = DeviceInventory::new();
    let mut errors = Vec::new();

    for (row, line) in lines {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |idx: usize| values.get(idx).copied().unwrap_or("");

        let device_type = field(columns.device_type);
        if device_type.is_empty() {
            errors.push(format!("Row {row}: Missing device type"));
            continue;
        }

        let Ok(quantity) = field(columns.quantity).parse::<u64>() else {
            errors.push(format!("Row {row}: Invalid quantity for {device_type}"));
            continue;
        };

        let raw_eps = columns.eps.map(field).unwrap_or("");
        let events_per_second = if raw_eps.is_empty() {
            catalog::default_eps(device_type).unwrap_or(0.0)
        } else {
            match raw_eps.parse::<f64>() {
                Ok(eps) if eps.is_finite() && eps >= 0.0 => eps,
                _ => {
                    errors.push(format!("Row {row}: Invalid EPS for {device_type}"));
                    continue;
                }
            }
        };

        if devices
            .insert(device_type.to_string(), DeviceEntry::new(quantity, events_per_second))
            .is_some()
        {
            log::warn!("Row {row}: {device_type} listed more than once; keeping the last row");
        }
    }

    if !errors.is_empty() {
        return Err(Error::InvalidInventory { errors });
    }

    log::debug!("Parsed {} device type(s) from CSV", devices.len());
    Ok(devices)
}

pub fn read_inventory<P: AsRef<Path>>(path: P) -> Result<DeviceInventory> {
    let text = std::fs::read_to_string(path)?;
    parse_inventory(&text)
}

/// Render an inventory as CSV. Device types with quantity 0 are left out.
#[must_use]
pub fn render_inventory(devices: &DeviceInventory) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for (device_type, entry) in devices.iter().filter(|(_, e)| e.quantity > 0) {
        let _ = writeln!(out, "{device_type},{},{}", entry.quantity, entry.events_per_second);
    }

    out
}

pub fn write_inventory<P: AsRef<Path>>(path: P, devices: &DeviceInventory) -> Result<()> {
    std::fs::write(path, render_inventory(devices))?;
    Ok(())
}

/// Blank CSV listing every catalog device type with its default rate.
#[must_use]
pub fn render_template() -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for entry in CATALOG {
        let _ = writeln!(out, "{},0,{}", entry.id, entry.default_eps);
    }

    out
}
