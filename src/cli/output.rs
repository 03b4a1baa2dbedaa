//! Output formatting for CLI

use crate::models::{AdvisoryKind, Configuration, DeviceInventory, RoleSpec, SizingResult};
use crate::services::aggregate::{SortBy, eps_share, top_sources};
use crate::services::compliance;
use crate::services::diff::ConfigurationDiff;
use crate::services::format::{format_number, format_size_gb, format_tb, format_usd};
use crate::services::vendor::VendorQuote;
use serde_json::Value;
use std::fmt::Write as _;

/// Get ANSI color code for an advisory category
fn color_for_kind(kind: AdvisoryKind) -> &'static str {
    match kind {
        AdvisoryKind::Error => "\x1b[31m",      // Red
        AdvisoryKind::Warning => "\x1b[33m",    // Yellow
        AdvisoryKind::Compliance => "\x1b[35m", // Magenta
        AdvisoryKind::Info => "\x1b[36m",       // Cyan
        AdvisoryKind::Success => "\x1b[32m",    // Green
    }
}

/// Reset ANSI color
const COLOR_RESET: &str = "\x1b[0m";

const RULE_WIDTH: usize = 72;

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH));
}

fn role_line(out: &mut String, label: &str, role: &RoleSpec) {
    let _ = writeln!(
        out,
        "  {:<20} {:>3} × {:>3} vCPU {:>4} GB RAM {:>6} GB disk",
        label, role.instances, role.cpu, role.ram, role.storage
    );
}

/// Sizing report options that do not come from the result itself
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub top: usize,
    pub sort: SortBy,
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top: 10,
            sort: SortBy::Eps,
            color: true,
        }
    }
}

/// Format a sizing result as human-readable text
#[allow(clippy::too_many_lines)]
#[must_use]
pub fn format_text(
    title: &str,
    devices: &DeviceInventory,
    config: &Configuration,
    result: &SizingResult,
    opts: ReportOptions,
) -> String {
    let mut out = String::new();
    let t = &result.throughput;

    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{} devices, {} EPS, {} retention, {} compression, replication ×{}",
        format_number(t.total_devices as f64),
        format_number(t.total_eps),
        if config.retention_period == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", config.retention_period)
        },
        config.compression_level,
        config.replication_factor
    );

    let sources = top_sources(devices, opts.sort, Some(opts.top));
    if !sources.is_empty() {
        section(&mut out, "Top event sources");
        let _ = writeln!(
            out,
            "  {:<28} {:>10} {:>8} {:>12} {:>6}",
            "Device type", "Quantity", "EPS/dev", "Total EPS", "%"
        );
        for (name, entry) in &sources {
            let _ = writeln!(
                out,
                "  {:<28} {:>10} {:>8} {:>12} {:>5.1}%",
                name,
                format_number(entry.quantity as f64),
                entry.events_per_second,
                format_number(entry.total_eps()),
                eps_share(entry, t.total_eps) * 100.0
            );
        }
    }

    section(&mut out, "Throughput & volume");
    let v = &result.volume;
    let _ = writeln!(out, "  Sustained EPS        {}", format_number(t.total_eps));
    let _ = writeln!(
        out,
        "  Peak EPS             {} (×{})",
        format_number(t.peak_eps),
        config.peak_factor
    );
    let _ = writeln!(out, "  Events per day       {}", format_number(v.events_per_day));
    let _ = writeln!(out, "  Daily volume         {}", format_size_gb(v.daily_gb));
    let _ = writeln!(
        out,
        "  Weekly / monthly     {} / {}",
        format_tb(v.weekly_tb),
        format_tb(v.monthly_tb)
    );
    let _ = writeln!(out, "  Yearly volume        {}", format_tb(v.yearly_tb));

    section(&mut out, "Storage");
    let s = &result.storage;
    let _ = writeln!(
        out,
        "  Raw ({} days)        {}",
        s.retention_days,
        format_size_gb(s.raw_gb)
    );
    let _ = writeln!(out, "  Compressed           {}", format_size_gb(s.compressed_gb));
    let _ = writeln!(out, "  Replicated           {}", format_size_gb(s.replicated_gb));
    let _ = writeln!(out, "  Total (with index)   {}", format_size_gb(s.total_gb));
    if let Some(tiers) = &s.tiers {
        let _ = writeln!(
            out,
            "  Hot tier             {} days, {}",
            tiers.hot_days,
            format_size_gb(tiers.hot_gb)
        );
        let _ = writeln!(
            out,
            "  Cold tier            {} days, {}",
            tiers.cold_days,
            format_size_gb(tiers.cold_gb)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  {:>8} {:>12} {:>12}", "Days", "Raw", "Total");
    for horizon in &result.storage_by_retention {
        let _ = writeln!(
            out,
            "  {:>8} {:>12} {:>12}",
            horizon.days,
            format_tb(horizon.raw_tb),
            format_tb(horizon.total_tb)
        );
    }

    section(&mut out, "Infrastructure");
    let topo = &result.topology;
    role_line(&mut out, "Management server", &topo.management_server);
    role_line(&mut out, "Data indexer", &topo.data_indexer);
    role_line(&mut out, "Web console", &topo.web_console);
    let _ = writeln!(
        out,
        "  Total: {} instances, {} vCPU, {} GB RAM, {} GB disk",
        topo.total_instances(),
        topo.total_cpu,
        topo.total_ram,
        topo.total_storage
    );

    section(&mut out, "Architecture");
    let arch = &result.architecture;
    let _ = writeln!(out, "  {}: {}", arch.kind, arch.description);
    let _ = writeln!(out, "  High availability: {}", arch.high_availability);
    let _ = writeln!(out, "  Scaling: {}", arch.scaling);

    if let Some(growth) = &result.growth {
        section(&mut out, &format!("Growth ({}% per year)", config.annual_growth));
        let _ = writeln!(
            out,
            "  {:>4} {:>10} {:>12} {:>12} {:>12}",
            "Year", "Devices", "EPS", "Daily", "Storage"
        );
        for year in growth {
            let _ = writeln!(
                out,
                "  {:>4} {:>10} {:>12} {:>12} {:>12}",
                year.year,
                format_number(year.devices as f64),
                format_number(year.total_eps),
                format_size_gb(year.daily_gb),
                format_tb(year.storage_tb)
            );
        }
    }

    section(&mut out, "Estimated cost (monthly)");
    let c = &result.costs;
    let _ = writeln!(out, "  Compute              {}", format_usd(c.hardware_monthly));
    let _ = writeln!(out, "  Storage              {}", format_usd(c.storage_monthly));
    let _ = writeln!(out, "  Network              {}", format_usd(c.network_monthly));
    let _ = writeln!(
        out,
        "  Total                {} ({} per year)",
        format_usd(c.total_monthly),
        format_usd(c.total_annual)
    );
    let _ = writeln!(
        out,
        "  Per device           ${:.2}   Per GB ingested ${:.3}",
        c.per_device_monthly, c.per_gb_ingested
    );

    if config.compliance != crate::models::ComplianceStandard::None {
        let template = compliance::template(config.compliance);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Compliance: {} ({}), retention {}-{} days",
            template.name, template.region, template.min_retention_days, template.max_retention_days
        );
    }

    section(&mut out, "Advisories");
    if result.advisories.is_empty() {
        let _ = writeln!(out, "  None");
    }
    for advisory in &result.advisories {
        let label = format!("[{}]", advisory.kind.as_str().to_uppercase());
        if opts.color {
            let _ = write!(out, "  {}{label:<12}{COLOR_RESET} ", color_for_kind(advisory.kind));
        } else {
            let _ = write!(out, "  {label:<12} ");
        }
        let _ = writeln!(out, "{}: {}", advisory.title, advisory.message);
    }

    out
}

/// Format a sizing result as JSON, optionally with a vendor comparison
#[must_use]
pub fn format_json(name: &str, result: &SizingResult, vendors: Option<&[VendorQuote]>) -> String {
    let mut output = serde_json::json!({
        "name": name,
        "results": result,
    });

    if let (Some(quotes), Some(obj)) = (vendors, output.as_object_mut()) {
        obj.insert(
            "vendorComparison".to_string(),
            serde_json::to_value(quotes).unwrap_or(Value::Null),
        );
    }

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Vendor comparison table, cheapest first
#[must_use]
pub fn format_vendor_table(quotes: &[VendorQuote]) -> String {
    let mut out = String::new();
    section(&mut out, "Vendor comparison (illustrative list prices)");
    let _ = writeln!(
        out,
        "  {:<30} {:>12} {:>14} {:>14} {:>10}",
        "Vendor", "Monthly", "Annual", "3-year TCO", "$/device"
    );
    for quote in quotes {
        let _ = writeln!(
            out,
            "  {:<30} {:>12} {:>14} {:>14} {:>10}",
            quote.vendor_id.name(),
            format_usd(quote.monthly_cost),
            format_usd(quote.annual_cost),
            format_usd(quote.three_year_tco),
            format_usd(quote.cost_per_device)
        );
    }
    out
}

/// One row per sized scenario
#[must_use]
pub fn format_scenario_table(rows: &[(String, SizingResult)]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<32} {:>9} {:>11} {:>11} {:>11} {:>19} {:>12}",
        "Scenario", "Devices", "EPS", "GB/day", "Storage", "Architecture", "Monthly"
    );
    let _ = writeln!(out, "{}", "─".repeat(111));
    for (label, result) in rows {
        let _ = writeln!(
            out,
            "{:<32} {:>9} {:>11} {:>11} {:>11} {:>19} {:>12}",
            label,
            format_number(result.throughput.total_devices as f64),
            format_number(result.throughput.total_eps),
            format_number(result.volume.daily_gb),
            format_tb(result.total_storage_tb()),
            result.architecture.kind.as_str(),
            format_usd(result.costs.total_monthly)
        );
    }
    out
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "(unset)".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Human-readable configuration diff
#[must_use]
pub fn format_diff(diff: &ConfigurationDiff) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} → {}", diff.from, diff.to);

    if diff.is_empty() {
        let _ = writeln!(out, "No differences.");
        return out;
    }

    if !diff.devices.is_empty() {
        section(&mut out, "Devices");
        for change in &diff.devices {
            let percent = change
                .change_percent
                .map_or_else(|| "N/A".to_string(), |p| format!("{p:+.1}%"));
            let _ = writeln!(
                out,
                "  {:<28} {:>8} → {:<8} ({:+}, {})",
                change.device_type, change.old_quantity, change.new_quantity, change.change, percent
            );
        }
    }

    if !diff.settings.is_empty() {
        section(&mut out, "Settings");
        for change in &diff.settings {
            let _ = writeln!(
                out,
                "  {:<28} {} → {}",
                change.setting,
                format_value(&change.old_value),
                format_value(&change.new_value)
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} change(s): {} device, {} setting",
        diff.summary.total_changes, diff.summary.device_changes, diff.summary.setting_changes
    );
    out
}
