//! Output types produced by the sizing pipeline

use super::ComplianceStandard;
use crate::services::volume::GB_PER_TB;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated fleet throughput
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Throughput {
    pub total_devices: u64,
    #[serde(rename = "totalEPS")]
    pub total_eps: f64,
    #[serde(rename = "peakEPS")]
    pub peak_eps: f64,
}

/// Data volume produced by the fleet over common periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeEstimate {
    pub events_per_day: f64,
    #[serde(rename = "dailyGB")]
    pub daily_gb: f64,
    #[serde(rename = "weeklyTB")]
    pub weekly_tb: f64,
    #[serde(rename = "monthlyTB")]
    pub monthly_tb: f64,
    #[serde(rename = "yearlyTB")]
    pub yearly_tb: f64,
}

/// Hot/cold breakdown when tiering is enabled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieredStorage {
    pub hot_days: u32,
    pub cold_days: u32,
    #[serde(rename = "hotGB")]
    pub hot_gb: f64,
    #[serde(rename = "coldGB")]
    pub cold_gb: f64,
}

/// Storage requirement for one retention window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoragePlan {
    pub retention_days: u32,
    #[serde(rename = "rawGB")]
    pub raw_gb: f64,
    #[serde(rename = "compressedGB")]
    pub compressed_gb: f64,
    #[serde(rename = "replicatedGB")]
    pub replicated_gb: f64,
    /// Final figure including indexing overhead.
    #[serde(rename = "totalGB")]
    pub total_gb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<TieredStorage>,
    /// Set when the configured hot window exceeded retention and was cut down.
    #[serde(default)]
    pub hot_days_clamped: bool,
}

impl StoragePlan {
    #[must_use]
    pub fn total_tb(&self) -> f64 {
        self.total_gb / GB_PER_TB
    }
}

/// Storage needed at a fixed comparison horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionHorizon {
    pub days: u32,
    #[serde(rename = "rawTB")]
    pub raw_tb: f64,
    #[serde(rename = "totalTB")]
    pub total_tb: f64,
}

/// Per-role instance allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSpec {
    pub instances: u32,
    /// vCPUs per instance.
    pub cpu: u32,
    /// GB of RAM per instance.
    pub ram: u32,
    /// GB of disk per instance.
    pub storage: u32,
}

impl RoleSpec {
    #[must_use]
    pub const fn new(instances: u32, cpu: u32, ram: u32, storage: u32) -> Self {
        Self {
            instances,
            cpu,
            ram,
            storage,
        }
    }

    #[must_use]
    pub fn total_cpu(&self) -> u64 {
        u64::from(self.instances) * u64::from(self.cpu)
    }

    #[must_use]
    pub fn total_ram(&self) -> u64 {
        u64::from(self.instances) * u64::from(self.ram)
    }

    #[must_use]
    pub fn total_storage(&self) -> u64 {
        u64::from(self.instances) * u64::from(self.storage)
    }
}

/// Compute topology: management, indexing and console roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub management_server: RoleSpec,
    pub data_indexer: RoleSpec,
    pub web_console: RoleSpec,
    #[serde(rename = "totalCPU")]
    pub total_cpu: u64,
    #[serde(rename = "totalRAM")]
    pub total_ram: u64,
    pub total_storage: u64,
}

impl Topology {
    #[must_use]
    pub fn from_roles(
        management_server: RoleSpec,
        data_indexer: RoleSpec,
        web_console: RoleSpec,
    ) -> Self {
        let roles = [management_server, data_indexer, web_console];
        Self {
            management_server,
            data_indexer,
            web_console,
            total_cpu: roles.iter().map(RoleSpec::total_cpu).sum(),
            total_ram: roles.iter().map(RoleSpec::total_ram).sum(),
            total_storage: roles.iter().map(RoleSpec::total_storage).sum(),
        }
    }

    #[must_use]
    pub fn total_instances(&self) -> u64 {
        [self.management_server, self.data_indexer, self.web_console]
            .iter()
            .map(|role| u64::from(role.instances))
            .sum()
    }
}

/// Deployment archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchitectureKind {
    #[serde(rename = "Single Node")]
    SingleNode,
    #[serde(rename = "Small Cluster")]
    SmallCluster,
    #[serde(rename = "Medium Cluster")]
    MediumCluster,
    #[serde(rename = "Large Cluster")]
    LargeCluster,
    #[serde(rename = "Enterprise Cluster")]
    EnterpriseCluster,
}

impl ArchitectureKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ArchitectureKind::SingleNode => "Single Node",
            ArchitectureKind::SmallCluster => "Small Cluster",
            ArchitectureKind::MediumCluster => "Medium Cluster",
            ArchitectureKind::LargeCluster => "Large Cluster",
            ArchitectureKind::EnterpriseCluster => "Enterprise Cluster",
        }
    }
}

impl fmt::Display for ArchitectureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative deployment description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    #[serde(rename = "type")]
    pub kind: ArchitectureKind,
    pub description: String,
    pub high_availability: String,
    pub scaling: String,
}

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthYear {
    pub year: u8,
    pub devices: u64,
    #[serde(rename = "totalEPS")]
    pub total_eps: f64,
    #[serde(rename = "dailyGB")]
    pub daily_gb: f64,
    #[serde(rename = "storageTB")]
    pub storage_tb: f64,
}

/// Monthly and annual running cost, in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Costs {
    pub hardware_monthly: f64,
    pub storage_monthly: f64,
    pub network_monthly: f64,
    pub total_monthly: f64,
    pub total_annual: f64,
    pub per_device_monthly: f64,
    #[serde(rename = "perGBIngested")]
    pub per_gb_ingested: f64,
}

/// Severity/category of an advisory message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Error,
    Warning,
    Compliance,
    Info,
    Success,
}

impl AdvisoryKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AdvisoryKind::Error => "error",
            AdvisoryKind::Warning => "warning",
            AdvisoryKind::Compliance => "compliance",
            AdvisoryKind::Info => "info",
            AdvisoryKind::Success => "success",
        }
    }
}

impl fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorized message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<ComplianceStandard>,
}

impl Advisory {
    #[must_use]
    pub fn new(kind: AdvisoryKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            standard: None,
        }
    }

    #[must_use]
    pub fn compliance(
        standard: ComplianceStandard,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: AdvisoryKind::Compliance,
            title: title.into(),
            message: message.into(),
            standard: Some(standard),
        }
    }

    /// Tag the message with the standard that triggered it.
    #[must_use]
    pub fn for_standard(mut self, standard: ComplianceStandard) -> Self {
        self.standard = Some(standard);
        self
    }
}

/// Full output of one sizing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingResult {
    pub throughput: Throughput,
    pub volume: VolumeEstimate,
    pub storage: StoragePlan,
    pub storage_by_retention: Vec<RetentionHorizon>,
    #[serde(rename = "infrastructure")]
    pub topology: Topology,
    pub architecture: Architecture,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<Vec<GrowthYear>>,
    pub costs: Costs,
    pub advisories: Vec<Advisory>,
}

impl SizingResult {
    #[must_use]
    pub fn total_storage_tb(&self) -> f64 {
        self.storage.total_tb()
    }

    /// Advisories of one category, in rule order.
    pub fn advisories_of(&self, kind: AdvisoryKind) -> impl Iterator<Item = &Advisory> {
        self.advisories.iter().filter(move |a| a.kind == kind)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.advisories_of(AdvisoryKind::Error).next().is_some()
    }
}
