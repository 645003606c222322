//! # LODESTONE
//!
//! Deterministic seed and structure finding over procedurally generated
//! worlds.
//!
//! This crate is the thin outer shell: scan profiles and the binaries'
//! shared exit-code contract. The scanners live in `lodestone_scan`, the
//! generation oracle in `lodestone_worldgen`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;

pub use config::{ProfileError, ScanProfile};

/// Exit code for missing or malformed command-line arguments.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for an unparseable version (or structure/biome name).
pub const EXIT_BAD_VERSION: i32 = 2;
/// Exit code for a structure-config lookup failure.
pub const EXIT_NO_CONFIG: i32 = 3;
