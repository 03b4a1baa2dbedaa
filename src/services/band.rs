//! Device-count banding shared by the topology sizer and architecture classifier

use serde::{Deserialize, Serialize};

/// Deployment size class derived from total device count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceBand {
    Single,
    Small,
    Medium,
    Large,
    Enterprise,
}

/// Exclusive upper bounds, scanned in order. Anything past the last bound is
/// [`DeviceBand::Enterprise`].
pub const BAND_LIMITS: [(u64, DeviceBand); 4] = [
    (100, DeviceBand::Single),
    (1_000, DeviceBand::Small),
    (5_000, DeviceBand::Medium),
    (10_000, DeviceBand::Large),
];

impl DeviceBand {
    /// Band for a device count; `total < upper` selects the band.
    #[must_use]
    pub fn for_devices(total_devices: u64) -> Self {
        BAND_LIMITS
            .iter()
            .find(|(upper, _)| total_devices < *upper)
            .map_or(DeviceBand::Enterprise, |(_, band)| *band)
    }

    /// Exclusive upper bound of this band, `None` for the open-ended top band.
    #[must_use]
    pub fn upper_bound(self) -> Option<u64> {
        BAND_LIMITS
            .iter()
            .find(|(_, band)| *band == self)
            .map(|(upper, _)| *upper)
    }

    /// Inclusive lower bound of this band.
    #[must_use]
    pub fn lower_bound(self) -> u64 {
        let mut lower = 0;
        for (upper, band) in BAND_LIMITS {
            if band == self {
                return lower;
            }
            lower = upper;
        }
        lower
    }
}
