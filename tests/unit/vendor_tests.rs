//! Unit tests for the vendor cost comparison

use siemsize::services::vendor::{VendorId, VendorRequirements, compare_vendors, vendor_cost};

fn requirements(daily_data_gb: f64, total_devices: u64, retention_days: u32) -> VendorRequirements {
    VendorRequirements {
        daily_data_gb,
        total_devices,
        retention_days,
        peak_eps: 0.0,
    }
}

#[test]
fn test_reference_quotes() {
    let req = requirements(691.2, 2, 90);

    let wazuh = vendor_cost(VendorId::Wazuh, &req);
    assert_eq!(wazuh.monthly_cost, 1_200.0);
    assert_eq!(wazuh.annual_cost, 14_400.0);
    assert_eq!(wazuh.three_year_tco, 53_200.0);

    // 691.2 GB/day sits in the 500-1000 tier at $120
    let splunk = vendor_cost(VendorId::Splunk, &req);
    assert_eq!(splunk.monthly_cost, 2_992_896.0);
    assert_eq!(splunk.setup_cost, 50_000.0);

    // 200+ GB/day commitment tier at $2.07
    let sentinel = vendor_cost(VendorId::AzureSentinel, &req);
    assert_eq!(sentinel.monthly_cost, 42_924.0);

    assert_eq!(vendor_cost(VendorId::Elastic, &req).monthly_cost, 3_285.0);
    assert_eq!(vendor_cost(VendorId::Datadog, &req).monthly_cost, 2_105.0);
    assert_eq!(vendor_cost(VendorId::Crowdstrike, &req).monthly_cost, 31_164.0);
}

#[test]
fn test_sentinel_charges_extended_retention() {
    let base = vendor_cost(VendorId::AzureSentinel, &requirements(691.2, 2, 90));
    let extended = vendor_cost(VendorId::AzureSentinel, &requirements(691.2, 2, 180));

    assert_eq!(base.monthly_cost, 42_924.0);
    assert_eq!(extended.monthly_cost, 50_388.0);
}

#[test]
fn test_comparison_sorted_by_monthly_cost() {
    let quotes = compare_vendors(&requirements(691.2, 2, 90));
    let order: Vec<VendorId> = quotes.iter().map(|q| q.vendor_id).collect();

    assert_eq!(
        order,
        vec![
            VendorId::Wazuh,
            VendorId::Datadog,
            VendorId::Elastic,
            VendorId::Crowdstrike,
            VendorId::AzureSentinel,
            VendorId::Splunk,
        ]
    );
}

#[test]
fn test_empty_fleet_ratios_are_zero() {
    for quote in compare_vendors(&requirements(0.0, 0, 90)) {
        assert_eq!(quote.cost_per_gb, 0.0, "{}", quote.vendor_id);
        assert_eq!(quote.cost_per_device, 0.0, "{}", quote.vendor_id);
        assert!(quote.three_year_tco >= quote.setup_cost + quote.implementation_cost);
    }
}
