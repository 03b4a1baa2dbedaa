//! Sizing pipeline stages and the supporting catalogs around them

pub mod advisory;
pub mod aggregate;
pub mod architecture;
pub mod band;
pub mod catalog;
pub mod compliance;
pub mod cost;
pub mod diff;
pub mod format;
pub mod growth;
pub mod scenario;
pub mod storage;
pub mod topology;
pub mod vendor;
pub mod volume;
