//! # Worldgen Error Types
//!
//! The fatal, pre-scan failures of the oracle. Expected per-candidate
//! outcomes (region generates nothing, position not viable) are `Option`
//! and `bool` returns, never errors.

use crate::placement::StructureType;
use lodestone_shared::{McVersion, UnsupportedVersion};
use thiserror::Error;

/// Errors that can occur in the world-generation oracle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldgenError {
    /// The requested version string is not a supported generation version.
    #[error(transparent)]
    UnsupportedVersion(#[from] UnsupportedVersion),

    /// The structure type is not defined for the given version.
    ///
    /// Fatal to a whole scan; there is no partial-structure-type fallback.
    #[error("no structure config for {structure} in {version}")]
    StructureConfigMissing {
        /// The structure type that was looked up.
        structure: StructureType,
        /// The version that lacks it.
        version: McVersion,
    },

    /// A generation query was made before a seed was applied.
    #[error("generator queried before a seed was applied")]
    SeedNotApplied,
}

/// Result type for oracle operations.
pub type WorldgenResult<T> = Result<T, WorldgenError>;
