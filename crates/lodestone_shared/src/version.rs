//! World-generation version and dimension tags.
//!
//! A scan is always pinned to one [`McVersion`]: biome climate parameters
//! and structure placement salts vary across versions, and mixing them
//! silently would break the determinism contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A version string that does not name a supported generation version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported version: {0}")]
pub struct UnsupportedVersion(pub String);

/// Supported world-generation versions, oldest first.
///
/// The ordering is meaningful: feature gates compare versions
/// (e.g. ruined portals exist from 1.16 onward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum McVersion {
    /// 1.14 - village-and-pillage era placement
    V1_14,
    /// 1.16 - nether update, introduces ruined portals
    V1_16,
    /// 1.18 - caves-and-cliffs terrain, altitude-aware climate
    V1_18,
    /// 1.20 - trails-and-tales
    V1_20,
    /// 1.20.6 - placement-identical to 1.20, parsed separately
    V1_20_6,
}

impl McVersion {
    /// All supported versions, oldest first.
    pub const ALL: [Self; 5] = [
        Self::V1_14,
        Self::V1_16,
        Self::V1_18,
        Self::V1_20,
        Self::V1_20_6,
    ];

    /// The dotted version string, e.g. `"1.20.6"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_14 => "1.14",
            Self::V1_16 => "1.16",
            Self::V1_18 => "1.18",
            Self::V1_20 => "1.20",
            Self::V1_20_6 => "1.20.6",
        }
    }

    /// Whether this version uses the altitude-aware climate model
    /// introduced with the 1.18 terrain rework.
    #[must_use]
    pub const fn has_depth_climate(self) -> bool {
        matches!(self, Self::V1_18 | Self::V1_20 | Self::V1_20_6)
    }
}

impl fmt::Display for McVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for McVersion {
    type Err = UnsupportedVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.14" => Ok(Self::V1_14),
            "1.16" => Ok(Self::V1_16),
            "1.18" => Ok(Self::V1_18),
            "1.20" => Ok(Self::V1_20),
            "1.20.6" => Ok(Self::V1_20_6),
            other => Err(UnsupportedVersion(other.to_owned())),
        }
    }
}

/// World dimension tag.
///
/// Only the Overworld is exercised by the scanners today; the tag exists
/// so seed application is explicit about which dimension it binds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// The surface dimension.
    #[default]
    Overworld,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_versions() {
        for version in McVersion::ALL {
            let parsed: McVersion = version.as_str().parse().expect("own string must parse");
            assert_eq!(parsed, version);
        }
    }

    #[test]
    fn test_unknown_version_rejected() {
        let err = "1.7.10".parse::<McVersion>().unwrap_err();
        assert_eq!(err, UnsupportedVersion("1.7.10".to_owned()));
    }

    #[test]
    fn test_ordering_matches_release_order() {
        assert!(McVersion::V1_14 < McVersion::V1_16);
        assert!(McVersion::V1_16 < McVersion::V1_18);
        assert!(McVersion::V1_20 < McVersion::V1_20_6);
    }

    #[test]
    fn test_depth_climate_gate() {
        assert!(!McVersion::V1_16.has_depth_climate());
        assert!(McVersion::V1_18.has_depth_climate());
    }
}
