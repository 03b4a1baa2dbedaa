//! Advisory engine: a flat table of independent rules
//!
//! Every rule is evaluated on every run; order in [`RULES`] only decides the
//! order of the emitted messages. Compliance checks are appended after the
//! general rules.

use crate::models::{
    Advisory, AdvisoryKind, CompressionLevel, Configuration, StoragePlan, Throughput, Topology,
};
use crate::services::compliance::compliance_advisories;
use crate::services::format::format_number;

/// Sustained EPS above which a deployment counts as high volume.
pub const HIGH_EPS_THRESHOLD: f64 = 100_000.0;

/// Retention beyond which tiering usually pays off.
pub const TIERING_RETENTION_DAYS: u32 = 90;

/// Final storage (TB) that warrants a dedicated storage review.
pub const LARGE_STORAGE_TB: f64 = 100.0;

/// Annual growth (%) considered aggressive.
pub const AGGRESSIVE_GROWTH_PCT: f64 = 50.0;

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryContext<'a> {
    pub throughput: &'a Throughput,
    pub storage: &'a StoragePlan,
    pub topology: &'a Topology,
    pub config: &'a Configuration,
}

impl AdvisoryContext<'_> {
    fn has_devices(&self) -> bool {
        self.throughput.total_devices > 0
    }
}

/// A predicate paired with the message it produces
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&AdvisoryContext<'_>) -> bool,
    pub render: fn(&AdvisoryContext<'_>) -> Advisory,
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "no-devices",
        applies: |ctx| !ctx.has_devices(),
        render: |_| {
            Advisory::new(
                AdvisoryKind::Error,
                "No devices configured",
                "Add at least one device to the inventory to size the deployment.",
            )
        },
    },
    Rule {
        name: "silent-fleet",
        applies: |ctx| ctx.has_devices() && ctx.throughput.total_eps <= 0.0,
        render: |ctx| {
            Advisory::new(
                AdvisoryKind::Warning,
                "No events expected",
                format!(
                    "{} devices are configured but none reports events per second.",
                    ctx.throughput.total_devices
                ),
            )
        },
    },
    Rule {
        name: "high-volume",
        applies: |ctx| ctx.throughput.total_eps > HIGH_EPS_THRESHOLD,
        render: |ctx| {
            Advisory::new(
                AdvisoryKind::Warning,
                "High event volume",
                format!(
                    "{} EPS exceeds {} EPS; plan a distributed indexer tier ({} indexers) \
                     and dedicated forwarders.",
                    format_number(ctx.throughput.total_eps),
                    format_number(HIGH_EPS_THRESHOLD),
                    ctx.topology.data_indexer.instances
                ),
            )
        },
    },
    Rule {
        name: "hot-days-clamped",
        applies: |ctx| ctx.storage.hot_days_clamped,
        render: |ctx| {
            Advisory::new(
                AdvisoryKind::Warning,
                "Hot storage longer than retention",
                format!(
                    "Hot storage of {} days exceeds the {}-day retention; \
                     the hot tier was limited to the retention period.",
                    ctx.config.hot_storage_days, ctx.config.retention_period
                ),
            )
        },
    },
    Rule {
        name: "large-storage",
        applies: |ctx| ctx.storage.total_tb() > LARGE_STORAGE_TB,
        render: |ctx| {
            Advisory::new(
                AdvisoryKind::Warning,
                "Large storage footprint",
                format!(
                    "{:.1} TB of storage is required; \
                     review tiering and archive options before procurement.",
                    ctx.storage.total_tb()
                ),
            )
        },
    },
    Rule {
        name: "aggressive-growth",
        applies: |ctx| {
            ctx.config.include_growth && ctx.config.annual_growth > AGGRESSIVE_GROWTH_PCT
        },
        render: |ctx| {
            Advisory::new(
                AdvisoryKind::Warning,
                "Aggressive growth assumption",
                format!(
                    "{}% annual growth more than doubles volume within two years; \
                     revisit sizing every quarter.",
                    ctx.config.annual_growth
                ),
            )
        },
    },
    Rule {
        name: "optimal-sizing",
        applies: |ctx| {
            ctx.has_devices()
                && ctx.throughput.total_eps > 0.0
                && ctx.throughput.total_eps <= HIGH_EPS_THRESHOLD
        },
        render: |ctx| {
            Advisory::new(
                AdvisoryKind::Success,
                "Sizing within optimal range",
                format!(
                    "{} EPS from {} devices fits a {}-instance deployment.",
                    format_number(ctx.throughput.total_eps),
                    ctx.throughput.total_devices,
                    ctx.topology.total_instances()
                ),
            )
        },
    },
    Rule {
        name: "enable-compression",
        applies: |ctx| ctx.has_devices() && ctx.config.compression_level == CompressionLevel::None,
        render: |_| {
            Advisory::new(
                AdvisoryKind::Info,
                "Enable compression",
                "Standard compression cuts stored volume by 40% and high compression by 60%.",
            )
        },
    },
    Rule {
        name: "enable-replication",
        applies: |ctx| ctx.has_devices() && ctx.config.replication_factor < 2,
        render: |_| {
            Advisory::new(
                AdvisoryKind::Info,
                "Enable replication",
                "A replication factor of 2 or more keeps logs searchable through a node failure.",
            )
        },
    },
    Rule {
        name: "consider-tiering",
        applies: |ctx| {
            ctx.has_devices()
                && !ctx.config.hot_cold_split
                && ctx.config.retention_period > TIERING_RETENTION_DAYS
        },
        render: |ctx| {
            Advisory::new(
                AdvisoryKind::Info,
                "Consider hot/cold tiering",
                format!(
                    "With {} days of retention, keeping only recent data \
                     on replicated hot storage lowers cost.",
                    ctx.config.retention_period
                ),
            )
        },
    },
];

/// Run every rule, then the compliance checks for the selected standard.
#[must_use]
pub fn evaluate(ctx: &AdvisoryContext<'_>) -> Vec<Advisory> {
    let mut advisories: Vec<Advisory> = RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| {
            log::trace!("Advisory rule {} fired", rule.name);
            (rule.render)(ctx)
        })
        .collect();

    advisories.extend(compliance_advisories(ctx.config));
    advisories
}
