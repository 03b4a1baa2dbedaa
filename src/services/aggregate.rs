//! Fleet aggregation: device counts and event rates

use crate::models::{DeviceEntry, DeviceInventory, Throughput};

/// Sum quantity and `quantity × eps` across the inventory.
///
/// `peak_factor` is applied to the total as-is; the configuration layer
/// guarantees it is at least 1.
#[must_use]
pub fn aggregate(devices: &DeviceInventory, peak_factor: f64) -> Throughput {
    let mut total_devices = 0u64;
    let mut total_eps = 0.0;

    for (device_type, entry) in devices {
        let line_eps = entry.total_eps();
        log::trace!(
            "{device_type}: {} devices x {} EPS = {line_eps} EPS",
            entry.quantity,
            entry.events_per_second
        );
        total_devices += entry.quantity;
        total_eps += line_eps;
    }

    Throughput {
        total_devices,
        total_eps,
        peak_eps: total_eps * peak_factor,
    }
}

/// Sort inventory lines by a specified field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Eps,
    Quantity,
}

impl SortBy {
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "eps" => Some(SortBy::Eps),
            "quantity" | "count" => Some(SortBy::Quantity),
            _ => None,
        }
    }
}

/// Inventory lines with at least one device, largest first, limited to top K
#[must_use]
pub fn top_sources(
    devices: &DeviceInventory,
    sort_by: SortBy,
    top_k: Option<usize>,
) -> Vec<(String, DeviceEntry)> {
    let mut lines: Vec<(String, DeviceEntry)> = devices
        .iter()
        .filter(|(_, entry)| entry.quantity > 0)
        .map(|(name, entry)| (name.clone(), *entry))
        .collect();

    match sort_by {
        SortBy::Eps => {
            lines.sort_by(|a, b| b.1.total_eps().total_cmp(&a.1.total_eps()));
        }
        SortBy::Quantity => {
            lines.sort_by(|a, b| b.1.quantity.cmp(&a.1.quantity));
        }
    }

    if let Some(k) = top_k {
        lines.truncate(k);
    }

    lines
}

/// Share of total EPS contributed by one line, 0 when the fleet is silent.
#[must_use]
pub fn eps_share(entry: &DeviceEntry, total_eps: f64) -> f64 {
    if total_eps > 0.0 {
        entry.total_eps() / total_eps
    } else {
        0.0
    }
}
