//! Deployment archetype classification

use crate::models::{Architecture, ArchitectureKind};
use crate::services::band::DeviceBand;

struct Archetype {
    kind: ArchitectureKind,
    description: &'static str,
    high_availability: &'static str,
    scaling: &'static str,
}

const fn archetype(band: DeviceBand) -> Archetype {
    match band {
        DeviceBand::Single => Archetype {
            kind: ArchitectureKind::SingleNode,
            description: "All-in-one deployment: manager, indexer and dashboard on a single host.",
            high_availability: "None; rely on backups and snapshot restore.",
            scaling: "Vertical: add CPU and RAM before splitting roles.",
        },
        DeviceBand::Small => Archetype {
            kind: ArchitectureKind::SmallCluster,
            description: "Dedicated manager with a two-node indexer cluster and a separate dashboard.",
            high_availability: "Indexer replicas survive the loss of one data node.",
            scaling: "Add indexer nodes as daily volume grows.",
        },
        DeviceBand::Medium => Archetype {
            kind: ArchitectureKind::MediumCluster,
            description: "Three-node indexer cluster behind a dedicated manager and dashboard.",
            high_availability: "Indexer quorum tolerates a node failure; manager is a single point of failure.",
            scaling: "Horizontal indexer scaling; consider dedicated ingest forwarders.",
        },
        DeviceBand::Large => Archetype {
            kind: ArchitectureKind::LargeCluster,
            description: "Clustered managers, five-node indexer tier and redundant dashboards behind a load balancer.",
            high_availability: "Active/active managers and dashboards; indexer replicas across racks.",
            scaling: "Horizontal on every tier; separate hot and cold data nodes.",
        },
        DeviceBand::Enterprise => Archetype {
            kind: ArchitectureKind::EnterpriseCluster,
            description: "Multi-site cluster with manager workers, an EPS-scaled indexer tier and load-balanced dashboards.",
            high_availability: "Cross-zone replication with automatic failover on every tier.",
            scaling: "Indexers scale with sustained EPS; federate search across sites.",
        },
    }
}

/// Classify a fleet by total device count.
#[must_use]
pub fn classify(total_devices: u64) -> Architecture {
    let archetype = archetype(DeviceBand::for_devices(total_devices));

    Architecture {
        kind: archetype.kind,
        description: archetype.description.to_string(),
        high_availability: archetype.high_availability.to_string(),
        scaling: archetype.scaling.to_string(),
    }
}
