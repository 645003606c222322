//! # Scan Error Types
//!
//! The only fatal failures a scan can hit come from the oracle before or
//! during iteration. Per-candidate misses (empty region, out of radius,
//! not viable) are filtering, not errors.

use lodestone_worldgen::WorldgenError;
use thiserror::Error;

/// Errors that can abort a scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The generation oracle refused the request.
    #[error(transparent)]
    Worldgen(#[from] WorldgenError),
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
