//! File formats: JSON configuration snapshots and CSV device inventories

pub mod inventory;
pub mod snapshot;
