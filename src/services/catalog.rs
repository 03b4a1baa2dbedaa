//! Default device catalog with typical per-device event rates

use crate::models::{DeviceEntry, DeviceInventory};

/// A known device type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub default_eps: f64,
}

const fn entry(
    id: &'static str,
    label: &'static str,
    category: &'static str,
    default_eps: f64,
) -> CatalogEntry {
    CatalogEntry {
        id,
        label,
        category,
        default_eps,
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    entry("windowsWorkstations", "Windows Workstations", "Endpoints", 3.0),
    entry("linuxWorkstations", "Linux Workstations", "Endpoints", 2.0),
    entry("macWorkstations", "macOS Workstations", "Endpoints", 2.0),
    entry("windowsServers", "Windows Servers", "Servers", 20.0),
    entry("linuxServers", "Linux Servers", "Servers", 15.0),
    entry("databaseServers", "Database Servers", "Servers", 30.0),
    entry("applicationServers", "Application Servers", "Servers", 25.0),
    entry("firewalls", "Firewalls", "Network", 200.0),
    entry("switches", "Switches", "Network", 50.0),
    entry("routers", "Routers", "Network", 300.0),
    entry("loadBalancers", "Load Balancers", "Network", 150.0),
    entry("idsIps", "IDS/IPS", "Network", 500.0),
    entry("awsResources", "AWS Resources", "Cloud", 10.0),
    entry("azureResources", "Azure Resources", "Cloud", 10.0),
    entry("gcpResources", "GCP Resources", "Cloud", 10.0),
    entry("otherCloud", "Other Cloud", "Cloud", 10.0),
    entry("siemAgents", "SIEM Agents", "Security", 5.0),
    entry("edrAgents", "EDR Agents", "Security", 15.0),
    entry("webAppFirewalls", "Web Application Firewalls", "Security", 100.0),
];

#[must_use]
pub fn lookup(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id.eq_ignore_ascii_case(id))
}

#[must_use]
pub fn default_eps(id: &str) -> Option<f64> {
    lookup(id).map(|e| e.default_eps)
}

/// Every catalog type with quantity 0 and its default rate.
#[must_use]
pub fn blank_inventory() -> DeviceInventory {
    CATALOG
        .iter()
        .map(|e| (e.id.to_string(), DeviceEntry::new(0, e.default_eps)))
        .collect()
}
