//! Topology sizing: per-role instance counts and resources for each band

use crate::models::{RoleSpec, Throughput, Topology};
use crate::services::band::DeviceBand;

/// Sustained EPS one indexer handles in the enterprise band.
pub const EPS_PER_INDEXER: f64 = 50_000.0;

/// Floor on indexer count in the enterprise band.
pub const MIN_ENTERPRISE_INDEXERS: u32 = 3;

/// How the indexer tier is sized within a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexerScaling {
    /// Use the instance count in the band's indexer spec.
    Fixed,
    /// `max(minimum, ceil(total_eps / eps_per_indexer))`.
    ByEps { minimum: u32, eps_per_indexer: f64 },
}

/// Resource template for one band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandTopology {
    pub management_server: RoleSpec,
    pub data_indexer: RoleSpec,
    pub web_console: RoleSpec,
    pub indexer_scaling: IndexerScaling,
}

/// Resource template for a band. CPU in vCPUs, RAM and storage in GB.
#[must_use]
pub const fn band_topology(band: DeviceBand) -> BandTopology {
    match band {
        DeviceBand::Single => BandTopology {
            management_server: RoleSpec::new(1, 4, 8, 100),
            data_indexer: RoleSpec::new(1, 4, 16, 500),
            web_console: RoleSpec::new(1, 2, 4, 50),
            indexer_scaling: IndexerScaling::Fixed,
        },
        DeviceBand::Small => BandTopology {
            management_server: RoleSpec::new(1, 8, 16, 200),
            data_indexer: RoleSpec::new(2, 8, 32, 1_000),
            web_console: RoleSpec::new(1, 4, 8, 100),
            indexer_scaling: IndexerScaling::Fixed,
        },
        DeviceBand::Medium => BandTopology {
            management_server: RoleSpec::new(1, 16, 32, 500),
            data_indexer: RoleSpec::new(3, 16, 64, 2_000),
            web_console: RoleSpec::new(1, 8, 16, 200),
            indexer_scaling: IndexerScaling::Fixed,
        },
        DeviceBand::Large => BandTopology {
            management_server: RoleSpec::new(2, 16, 32, 500),
            data_indexer: RoleSpec::new(5, 32, 128, 4_000),
            web_console: RoleSpec::new(2, 8, 16, 200),
            indexer_scaling: IndexerScaling::Fixed,
        },
        DeviceBand::Enterprise => BandTopology {
            management_server: RoleSpec::new(3, 32, 64, 1_000),
            data_indexer: RoleSpec::new(MIN_ENTERPRISE_INDEXERS, 32, 128, 8_000),
            web_console: RoleSpec::new(2, 16, 32, 500),
            indexer_scaling: IndexerScaling::ByEps {
                minimum: MIN_ENTERPRISE_INDEXERS,
                eps_per_indexer: EPS_PER_INDEXER,
            },
        },
    }
}

fn indexer_count(scaling: IndexerScaling, fixed: u32, total_eps: f64) -> u32 {
    match scaling {
        IndexerScaling::Fixed => fixed,
        IndexerScaling::ByEps {
            minimum,
            eps_per_indexer,
        } => {
            if !(total_eps.is_finite() && total_eps > 0.0) || eps_per_indexer <= 0.0 {
                return minimum;
            }
            let needed = (total_eps / eps_per_indexer).ceil();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let needed = if needed >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                needed as u32
            };
            needed.max(minimum)
        }
    }
}

/// Size the management, indexer and console roles for a fleet.
#[must_use]
pub fn size_topology(throughput: &Throughput) -> Topology {
    let band = DeviceBand::for_devices(throughput.total_devices);
    let template = band_topology(band);

    let data_indexer = RoleSpec {
        instances: indexer_count(
            template.indexer_scaling,
            template.data_indexer.instances,
            throughput.total_eps,
        ),
        ..template.data_indexer
    };

    log::debug!(
        "Topology band {band:?}: {} indexer(s) for {} devices / {} EPS",
        data_indexer.instances,
        throughput.total_devices,
        throughput.total_eps
    );

    Topology::from_roles(template.management_server, data_indexer, template.web_console)
}
