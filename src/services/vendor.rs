//! Illustrative SIEM vendor cost comparison
//!
//! Prices approximate public list pricing and exist to compare orders of
//! magnitude, not to quote.

use crate::models::{Configuration, SizingResult};
use crate::services::volume::DAYS_PER_MONTH;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorId {
    Splunk,
    Elastic,
    AzureSentinel,
    Wazuh,
    Datadog,
    Crowdstrike,
}

impl VendorId {
    pub const ALL: [VendorId; 6] = [
        VendorId::Splunk,
        VendorId::Elastic,
        VendorId::AzureSentinel,
        VendorId::Wazuh,
        VendorId::Datadog,
        VendorId::Crowdstrike,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            VendorId::Splunk => "Splunk Enterprise Security",
            VendorId::Elastic => "Elastic Security (ELK Stack)",
            VendorId::AzureSentinel => "Microsoft Azure Sentinel",
            VendorId::Wazuh => "Wazuh (Open Source)",
            VendorId::Datadog => "Datadog Security Monitoring",
            VendorId::Crowdstrike => "CrowdStrike Falcon",
        }
    }

    #[must_use]
    pub fn pricing_model(self) -> &'static str {
        match self {
            VendorId::Splunk => "GB per day ingestion",
            VendorId::Elastic => "Subscription tiers",
            VendorId::AzureSentinel => "Consumption-based (GB ingested)",
            VendorId::Wazuh => "Infrastructure costs only",
            VendorId::Datadog => "Per host + ingestion",
            VendorId::Crowdstrike => "Per endpoint",
        }
    }

    /// One-time setup and implementation fees.
    fn one_time_fees(self) -> (f64, f64) {
        match self {
            VendorId::Splunk => (50_000.0, 25_000.0),
            VendorId::Elastic => (15_000.0, 15_000.0),
            VendorId::AzureSentinel => (0.0, 20_000.0),
            VendorId::Wazuh => (0.0, 10_000.0),
            VendorId::Datadog => (5_000.0, 15_000.0),
            VendorId::Crowdstrike => (10_000.0, 20_000.0),
        }
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs the vendor models depend on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRequirements {
    #[serde(rename = "dailyDataGB")]
    pub daily_data_gb: f64,
    pub total_devices: u64,
    pub retention_days: u32,
    #[serde(rename = "peakEPS")]
    pub peak_eps: f64,
}

impl VendorRequirements {
    #[must_use]
    pub fn from_result(result: &SizingResult, config: &Configuration) -> Self {
        Self {
            daily_data_gb: result.volume.daily_gb,
            total_devices: result.throughput.total_devices,
            retention_days: config.retention_period,
            peak_eps: result.throughput.peak_eps,
        }
    }
}

/// Cost estimate for one vendor, whole USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorQuote {
    pub vendor_id: VendorId,
    pub monthly_cost: f64,
    pub annual_cost: f64,
    pub setup_cost: f64,
    pub implementation_cost: f64,
    #[serde(rename = "threeYearTCO")]
    pub three_year_tco: f64,
    #[serde(rename = "costPerGB")]
    pub cost_per_gb: f64,
    pub cost_per_device: f64,
}

/// Splunk license tiers: (daily GB lower bound, USD per GB/day).
const SPLUNK_TIERS: [(f64, f64); 4] = [
    (0.0, 150.0),
    (100.0, 135.0),
    (500.0, 120.0),
    (1000.0, 100.0),
];
const SPLUNK_SUPPORT_RATE: f64 = 0.20;

const ELASTIC_PLATINUM_PER_HOST: f64 = 175.0;
const ELASTIC_DEVICES_PER_HOST: u64 = 100;
const ELASTIC_HOT_STORAGE_PER_GB: f64 = 0.15;

/// Sentinel commitment tiers: (daily GB threshold, USD per GB), highest first.
const SENTINEL_COMMITMENTS: [(f64, f64); 3] = [(1000.0, 1.84), (200.0, 2.07), (100.0, 2.30)];
const SENTINEL_PAY_AS_YOU_GO: f64 = 2.76;
const SENTINEL_FREE_RETENTION_DAYS: u32 = 90;
const SENTINEL_RETENTION_PER_GB_MONTH: f64 = 0.12;

const WAZUH_CLOUD_HOSTING: f64 = 1200.0;

const DATADOG_PRO_PER_HOST: f64 = 31.0;
const DATADOG_DEVICES_PER_HOST: u64 = 50;
const DATADOG_INGESTION_PER_GB: f64 = 0.10;

const CROWDSTRIKE_COMPLETE_PER_ENDPOINT: f64 = 29.99;
const CROWDSTRIKE_LOGSCALE_PER_GB: f64 = 1.50;

#[allow(clippy::cast_precision_loss)]
fn hosts(devices: u64, per_host: u64) -> f64 {
    devices.div_ceil(per_host) as f64
}

fn monthly_cost(vendor: VendorId, req: &VendorRequirements) -> f64 {
    let daily = req.daily_data_gb;
    let monthly_gb = daily * DAYS_PER_MONTH;

    match vendor {
        VendorId::Splunk => {
            let price = SPLUNK_TIERS
                .iter()
                .rev()
                .find(|(lower, _)| daily >= *lower)
                .map_or(SPLUNK_TIERS[0].1, |(_, price)| *price);
            let daily_cost = daily * price;
            let annual_license = daily_cost * 365.0;
            daily_cost * DAYS_PER_MONTH + annual_license * SPLUNK_SUPPORT_RATE / 12.0
        }
        VendorId::Elastic => {
            hosts(req.total_devices, ELASTIC_DEVICES_PER_HOST) * ELASTIC_PLATINUM_PER_HOST
                + monthly_gb * ELASTIC_HOT_STORAGE_PER_GB
        }
        VendorId::AzureSentinel => {
            let price = SENTINEL_COMMITMENTS
                .iter()
                .find(|(threshold, _)| daily >= *threshold)
                .map_or(SENTINEL_PAY_AS_YOU_GO, |(_, price)| *price);
            let mut cost = monthly_gb * price;
            if req.retention_days > SENTINEL_FREE_RETENTION_DAYS {
                let extra_months =
                    f64::from(req.retention_days - SENTINEL_FREE_RETENTION_DAYS) / DAYS_PER_MONTH;
                cost += monthly_gb * extra_months * SENTINEL_RETENTION_PER_GB_MONTH;
            }
            cost
        }
        VendorId::Wazuh => WAZUH_CLOUD_HOSTING,
        VendorId::Datadog => {
            hosts(req.total_devices, DATADOG_DEVICES_PER_HOST) * DATADOG_PRO_PER_HOST
                + monthly_gb * DATADOG_INGESTION_PER_GB
        }
        VendorId::Crowdstrike => {
            #[allow(clippy::cast_precision_loss)]
            let endpoints = req.total_devices as f64;
            endpoints * CROWDSTRIKE_COMPLETE_PER_ENDPOINT + monthly_gb * CROWDSTRIKE_LOGSCALE_PER_GB
        }
    }
}

/// Quote one vendor. Per-GB and per-device ratios are 0 for an empty fleet.
#[must_use]
pub fn vendor_cost(vendor: VendorId, req: &VendorRequirements) -> VendorQuote {
    let monthly = monthly_cost(vendor, req);
    let annual = monthly * 12.0;
    let (setup_cost, implementation_cost) = vendor.one_time_fees();
    let monthly_gb = req.daily_data_gb * DAYS_PER_MONTH;

    let cost_per_gb = if monthly_gb > 0.0 {
        monthly / monthly_gb
    } else {
        0.0
    };
    #[allow(clippy::cast_precision_loss)]
    let cost_per_device = if req.total_devices > 0 {
        monthly / req.total_devices as f64
    } else {
        0.0
    };

    VendorQuote {
        vendor_id: vendor,
        monthly_cost: monthly.round(),
        annual_cost: annual.round(),
        setup_cost,
        implementation_cost,
        three_year_tco: (annual * 3.0 + setup_cost + implementation_cost).round(),
        cost_per_gb: cost_per_gb.round(),
        cost_per_device: cost_per_device.round(),
    }
}

/// Quote every vendor, cheapest monthly cost first.
#[must_use]
pub fn compare_vendors(req: &VendorRequirements) -> Vec<VendorQuote> {
    let mut quotes: Vec<VendorQuote> = VendorId::ALL
        .iter()
        .map(|&vendor| vendor_cost(vendor, req))
        .collect();
    quotes.sort_by(|a, b| a.monthly_cost.total_cmp(&b.monthly_cost));
    quotes
}
