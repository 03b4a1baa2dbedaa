//! Data models for the device inventory, sizing configuration and results

mod result;

pub use result::{
    Advisory, AdvisoryKind, Architecture, ArchitectureKind, Costs, GrowthYear, RetentionHorizon,
    RoleSpec, SizingResult, StoragePlan, Throughput, TieredStorage, Topology, VolumeEstimate,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Device inventory keyed by device-type identifier (e.g. `"firewalls"`).
///
/// The key is a reporting label only; a `BTreeMap` keeps iteration order stable
/// so text output and CSV export are deterministic.
pub type DeviceInventory = BTreeMap<String, DeviceEntry>;

/// One inventory line: how many devices of a type and how chatty each one is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DeviceEntry {
    pub quantity: u64,
    #[serde(rename = "eps", alias = "eventsPerSecond")]
    pub events_per_second: f64,
}

impl DeviceEntry {
    #[must_use]
    pub fn new(quantity: u64, events_per_second: f64) -> Self {
        Self {
            quantity,
            events_per_second,
        }
    }

    /// Aggregate event rate for this line (`quantity × eps`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_eps(&self) -> f64 {
        self.quantity as f64 * self.events_per_second
    }
}

/// Compression applied to indexed data before replication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    None,
    #[default]
    Standard,
    High,
}

impl CompressionLevel {
    pub const ALL: [CompressionLevel; 3] = [
        CompressionLevel::None,
        CompressionLevel::Standard,
        CompressionLevel::High,
    ];

    /// Fraction of the original size retained after compression.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            CompressionLevel::None => 1.0,
            CompressionLevel::Standard => 0.6,
            CompressionLevel::High => 0.4,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CompressionLevel::None => "none",
            CompressionLevel::Standard => "standard",
            CompressionLevel::High => "high",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "none" | "off" => Some(CompressionLevel::None),
            "standard" | "default" => Some(CompressionLevel::Standard),
            "high" => Some(CompressionLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompressionLevel::from_label(s)
            .ok_or_else(|| format!("unknown compression level '{s}' (use none, standard or high)"))
    }
}

/// Regulatory regime the deployment is sized against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ComplianceStandard {
    #[serde(rename = "GDPR", alias = "gdpr")]
    Gdpr,
    #[serde(rename = "CCPA", alias = "ccpa")]
    Ccpa,
    #[serde(rename = "PIPEDA", alias = "pipeda")]
    Pipeda,
    #[serde(rename = "HIPAA", alias = "hipaa")]
    Hipaa,
    #[serde(rename = "PCI_DSS", alias = "pci-dss")]
    PciDss,
    #[serde(rename = "SOC2", alias = "soc2")]
    Soc2,
    #[default]
    #[serde(rename = "NONE", alias = "custom")]
    None,
}

impl ComplianceStandard {
    pub const ALL: [ComplianceStandard; 7] = [
        ComplianceStandard::Gdpr,
        ComplianceStandard::Ccpa,
        ComplianceStandard::Pipeda,
        ComplianceStandard::Hipaa,
        ComplianceStandard::PciDss,
        ComplianceStandard::Soc2,
        ComplianceStandard::None,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ComplianceStandard::Gdpr => "GDPR",
            ComplianceStandard::Ccpa => "CCPA",
            ComplianceStandard::Pipeda => "PIPEDA",
            ComplianceStandard::Hipaa => "HIPAA",
            ComplianceStandard::PciDss => "PCI_DSS",
            ComplianceStandard::Soc2 => "SOC2",
            ComplianceStandard::None => "NONE",
        }
    }

    /// Accepts ids in any case, with `-` or `_` separators; `custom` means none.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "GDPR" => Some(ComplianceStandard::Gdpr),
            "CCPA" => Some(ComplianceStandard::Ccpa),
            "PIPEDA" => Some(ComplianceStandard::Pipeda),
            "HIPAA" => Some(ComplianceStandard::Hipaa),
            "PCI_DSS" | "PCI" | "PCIDSS" => Some(ComplianceStandard::PciDss),
            "SOC2" | "SOC_2" => Some(ComplianceStandard::Soc2),
            "NONE" | "CUSTOM" => Some(ComplianceStandard::None),
            _ => None,
        }
    }
}

impl fmt::Display for ComplianceStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ComplianceStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplianceStandard::from_label(s)
            .ok_or_else(|| format!("unknown compliance standard '{s}'"))
    }
}

/// Sizing knobs.
///
/// Every field has a default so partially specified JSON documents load; the
/// defaults match a fresh calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Total days events stay queryable.
    pub retention_period: u32,
    pub hot_cold_split: bool,
    /// Days kept on the replicated hot tier when `hot_cold_split` is on.
    pub hot_storage_days: u32,
    pub compression_level: CompressionLevel,
    pub replication_factor: u32,
    pub include_growth: bool,
    /// Annual growth in percent.
    pub annual_growth: f64,
    /// Projection horizon in years (1..=3).
    pub growth_years: u8,
    /// Multiplier from average to peak EPS.
    pub peak_factor: f64,
    #[serde(alias = "complianceTemplate")]
    pub compliance: ComplianceStandard,
    pub encryption: bool,
    pub high_availability: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            retention_period: 90,
            hot_cold_split: false,
            hot_storage_days: 30,
            compression_level: CompressionLevel::Standard,
            replication_factor: 2,
            include_growth: false,
            annual_growth: 20.0,
            growth_years: 3,
            peak_factor: 1.3,
            compliance: ComplianceStandard::None,
            encryption: false,
            high_availability: false,
        }
    }
}

impl Configuration {
    /// Longest growth projection supported.
    pub const MAX_GROWTH_YEARS: u8 = 3;

    /// Check the invariants the calculation pipeline relies on.
    ///
    /// Returns every violation found, or an empty vector for a usable
    /// configuration.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.retention_period == 0 {
            problems.push("retention period must be at least 1 day".to_string());
        }
        if self.replication_factor == 0 {
            problems.push("replication factor must be at least 1".to_string());
        }
        if self.hot_cold_split && self.hot_storage_days > self.retention_period {
            problems.push(format!(
                "hot storage days ({}) exceed retention period ({})",
                self.hot_storage_days, self.retention_period
            ));
        }
        if !self.peak_factor.is_finite() || self.peak_factor < 1.0 {
            problems.push("peak factor must be a finite number >= 1".to_string());
        }
        if !self.annual_growth.is_finite() || self.annual_growth < 0.0 {
            problems.push("annual growth must be a finite, non-negative percentage".to_string());
        }
        if self.include_growth
            && !(1..=Self::MAX_GROWTH_YEARS).contains(&self.growth_years)
        {
            problems.push(format!(
                "growth projection must cover 1 to {} years",
                Self::MAX_GROWTH_YEARS
            ));
        }

        problems
    }
}

/// Check every inventory line for a usable event rate.
#[must_use]
pub fn inventory_violations(devices: &DeviceInventory) -> Vec<String> {
    devices
        .iter()
        .filter(|(_, entry)| !entry.events_per_second.is_finite() || entry.events_per_second < 0.0)
        .map(|(device_type, _)| {
            format!("events per second for {device_type} must be a finite, non-negative number")
        })
        .collect()
}
