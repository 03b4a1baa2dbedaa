//! Built-in deployment presets and parallel batch sizing

use crate::models::{
    ComplianceStandard, CompressionLevel, Configuration, DeviceEntry, DeviceInventory,
    SizingResult,
};
use crate::services::cost::PriceTable;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Device types used by the presets, with their per-device EPS.
pub const SCENARIO_DEVICE_TYPES: [(&str, f64); 16] = [
    ("workstations", 2.0),
    ("servers", 10.0),
    ("mobileDevices", 1.0),
    ("virtualMachines", 5.0),
    ("routers", 300.0),
    ("firewalls", 500.0),
    ("loadBalancers", 200.0),
    ("wirelessAP", 50.0),
    ("ids", 1000.0),
    ("proxies", 800.0),
    ("dlp", 600.0),
    ("emailGateway", 400.0),
    ("cloudApps", 100.0),
    ("containers", 3.0),
    ("apiGateways", 150.0),
    ("databases", 200.0),
];

struct Preset {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    /// Quantities in [`SCENARIO_DEVICE_TYPES`] order.
    quantities: [u64; 16],
    retention_period: u32,
    compliance: ComplianceStandard,
    annual_growth: f64,
    replication_factor: u32,
    compression_level: CompressionLevel,
    hot_storage_days: u32,
    high_availability: bool,
}

const PRESETS: [Preset; 6] = [
    Preset {
        id: "FORTUNE_500",
        name: "Fortune 500 Enterprise",
        category: "Enterprise",
        description: "10,000+ devices, multi-region deployment with high availability",
        quantities: [8000, 1500, 3000, 2000, 200, 100, 50, 500, 50, 40, 30, 20, 100, 5000, 50, 200],
        retention_period: 180,
        compliance: ComplianceStandard::Soc2,
        annual_growth: 15.0,
        replication_factor: 3,
        compression_level: CompressionLevel::High,
        hot_storage_days: 60,
        high_availability: true,
    },
    Preset {
        id: "MSP_CLOUD",
        name: "MSP/Cloud Provider",
        category: "Service Provider",
        description: "Multi-tenant environment with dynamic scaling",
        quantities: [2000, 500, 1000, 3000, 100, 80, 60, 200, 40, 50, 30, 40, 500, 10000, 100, 300],
        retention_period: 90,
        compliance: ComplianceStandard::Soc2,
        annual_growth: 30.0,
        replication_factor: 2,
        compression_level: CompressionLevel::High,
        hot_storage_days: 30,
        high_availability: true,
    },
    Preset {
        id: "CLOUD_STARTUP",
        name: "Cloud-Native Startup",
        category: "Startup",
        description: "AWS/Azure/GCP, containers, serverless architecture",
        quantities: [200, 50, 100, 100, 10, 5, 10, 20, 5, 5, 2, 2, 50, 2000, 20, 30],
        retention_period: 60,
        compliance: ComplianceStandard::None,
        annual_growth: 50.0,
        replication_factor: 2,
        compression_level: CompressionLevel::Standard,
        hot_storage_days: 30,
        high_availability: false,
    },
    Preset {
        id: "FINANCE",
        name: "Regulated Industry - Finance",
        category: "Finance",
        description: "PCI-DSS compliance, 90+ day retention, high security",
        quantities: [3000, 500, 1000, 800, 80, 60, 40, 150, 30, 40, 25, 15, 80, 1000, 40, 150],
        retention_period: 365,
        compliance: ComplianceStandard::PciDss,
        annual_growth: 10.0,
        replication_factor: 3,
        compression_level: CompressionLevel::Standard,
        hot_storage_days: 90,
        high_availability: true,
    },
    Preset {
        id: "HEALTHCARE",
        name: "Regulated Industry - Healthcare",
        category: "Healthcare",
        description: "HIPAA compliance, encryption, 365-day retention",
        quantities: [2000, 400, 800, 600, 60, 50, 30, 200, 25, 30, 20, 15, 60, 500, 30, 100],
        retention_period: 365,
        compliance: ComplianceStandard::Hipaa,
        annual_growth: 12.0,
        replication_factor: 3,
        compression_level: CompressionLevel::Standard,
        hot_storage_days: 90,
        high_availability: true,
    },
    Preset {
        id: "MANUFACTURING",
        name: "Manufacturing & IoT",
        category: "Industrial",
        description: "IoT sensors, critical infrastructure, air-gapped networks",
        quantities: [1000, 200, 300, 400, 100, 40, 20, 150, 30, 20, 10, 10, 30, 200, 15, 80],
        retention_period: 180,
        compliance: ComplianceStandard::None,
        annual_growth: 8.0,
        replication_factor: 2,
        compression_level: CompressionLevel::High,
        hot_storage_days: 60,
        high_availability: true,
    },
];

/// A ready-to-size deployment preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub devices: DeviceInventory,
    pub configuration: Configuration,
}

impl Scenario {
    fn from_preset(preset: &Preset) -> Self {
        let devices = SCENARIO_DEVICE_TYPES
            .iter()
            .zip(preset.quantities)
            .map(|((name, eps), quantity)| ((*name).to_string(), DeviceEntry::new(quantity, *eps)))
            .collect();

        let configuration = Configuration {
            retention_period: preset.retention_period,
            hot_cold_split: true,
            hot_storage_days: preset.hot_storage_days,
            compression_level: preset.compression_level,
            replication_factor: preset.replication_factor,
            include_growth: true,
            annual_growth: preset.annual_growth,
            compliance: preset.compliance,
            encryption: true,
            high_availability: preset.high_availability,
            ..Configuration::default()
        };

        Self {
            id: preset.id.to_string(),
            name: preset.name.to_string(),
            category: preset.category.to_string(),
            description: preset.description.to_string(),
            devices,
            configuration,
        }
    }

    #[must_use]
    pub fn request(&self) -> SizingRequest {
        SizingRequest {
            label: self.name.clone(),
            devices: self.devices.clone(),
            configuration: self.configuration.clone(),
        }
    }
}

/// All presets in catalog order.
#[must_use]
pub fn all() -> Vec<Scenario> {
    PRESETS.iter().map(Scenario::from_preset).collect()
}

/// Case-insensitive lookup by id.
#[must_use]
pub fn by_id(id: &str) -> Option<Scenario> {
    PRESETS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .map(Scenario::from_preset)
}

#[must_use]
pub fn by_category(category: &str) -> Vec<Scenario> {
    PRESETS
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .map(Scenario::from_preset)
        .collect()
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for preset in &PRESETS {
        if !seen.contains(&preset.category) {
            seen.push(preset.category);
        }
    }
    seen
}

/// One labelled input pair for batch sizing
#[derive(Debug, Clone, PartialEq)]
pub struct SizingRequest {
    pub label: String,
    pub devices: DeviceInventory,
    pub configuration: Configuration,
}

/// Size many requests in parallel. Output order follows input order.
#[must_use]
pub fn size_batch(requests: &[SizingRequest], prices: &PriceTable) -> Vec<(String, SizingResult)> {
    log::debug!("Sizing {} request(s) in parallel", requests.len());

    requests
        .par_iter()
        .map(|req| {
            let result =
                crate::compute_sizing_with_prices(&req.devices, &req.configuration, prices);
            (req.label.clone(), result)
        })
        .collect()
}
