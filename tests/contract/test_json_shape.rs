//! Contract test for JSON output shape

use crate::fixtures::{reference_config, reference_inventory};
use siemsize::cli::output::format_json;
use siemsize::services::vendor::{VendorRequirements, compare_vendors};
use siemsize::{Configuration, compute_sizing};
use serde_json::Value;

#[test]
fn test_result_json_fields() {
    let result = compute_sizing(&reference_inventory(), &reference_config());
    let json: Value = serde_json::to_value(&result).unwrap();

    for key in [
        "throughput",
        "volume",
        "storage",
        "storageByRetention",
        "infrastructure",
        "architecture",
        "costs",
        "advisories",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }

    assert_eq!(json["throughput"]["totalDevices"], 2);
    assert!(json["throughput"]["totalEPS"].is_number());
    assert!(json["throughput"]["peakEPS"].is_number());
    assert!(json["volume"]["dailyGB"].is_number());
    assert!(json["storage"]["totalGB"].is_number());
    assert!(json["storage"].get("tiers").is_none());
    assert_eq!(json["infrastructure"]["dataIndexer"]["instances"], 1);
    assert!(json["infrastructure"]["totalCPU"].is_u64());
    assert_eq!(json["architecture"]["type"], "Single Node");
    assert!(json["costs"]["totalMonthly"].is_number());
    assert!(json["costs"]["perGBIngested"].is_number());
    assert_eq!(json["advisories"][0]["kind"], "success");

    // Growth is omitted unless requested
    assert!(json.get("growth").is_none());
}

#[test]
fn test_growth_and_tiers_present_when_enabled() {
    let config = Configuration {
        hot_cold_split: true,
        include_growth: true,
        ..reference_config()
    };
    let result = compute_sizing(&reference_inventory(), &config);
    let json: Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["growth"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["growth"][0]["year"], 1);
    assert!(json["growth"][0]["storageTB"].is_number());
    assert_eq!(json["storage"]["tiers"]["hotDays"], 30);
    assert_eq!(json["storage"]["tiers"]["coldDays"], 60);
}

#[test]
fn test_cli_json_with_vendor_comparison() {
    let config = reference_config();
    let result = compute_sizing(&reference_inventory(), &config);
    let quotes = compare_vendors(&VendorRequirements::from_result(&result, &config));

    let output: Value = serde_json::from_str(&format_json("lab", &result, Some(quotes.as_slice()))).unwrap();

    assert_eq!(output["name"], "lab");
    assert!(output["results"]["volume"]["dailyGB"].is_number());
    let vendors = output["vendorComparison"].as_array().expect("vendor array");
    assert_eq!(vendors.len(), 6);
    assert_eq!(vendors[0]["vendorId"], "WAZUH");
    assert!(vendors[0]["threeYearTCO"].is_number());
}
