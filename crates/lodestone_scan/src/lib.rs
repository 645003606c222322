//! # LODESTONE Scan
//!
//! The seed-conditioned bounded-region scanners.
//!
//! Two scan modes share one shape: apply a seed to a generation context,
//! probe positions against a predicate, stop on the first acceptable
//! result or enumerate all within bounds.
//!
//! ## Core Components
//!
//! - [`SeedScanner`]: walks a caller-supplied seed sequence until a
//!   single-point biome predicate holds
//! - [`RegionGridScanner`]: enumerates every structure candidate within a
//!   block radius of an origin for one fixed seed
//! - [`RegionWindow`]: the conservative region-coordinate window both
//!   derive their iteration bounds from
//!
//! ## Example
//!
//! ```rust,ignore
//! use lodestone_scan::RegionGridScanner;
//! use lodestone_shared::{McVersion, Seed};
//! use lodestone_worldgen::{StructureType, ViabilityFlags};
//!
//! let scanner = RegionGridScanner::new(StructureType::RuinedPortal, McVersion::V1_20)
//!     .with_radius_chunks(1000);
//! let report = scanner.run(Seed::new(12345), None)?;
//! for hit in &report.hits {
//!     println!("{} x={} z={}", hit.structure, hit.pos.x, hit.pos.z);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod region_scan;
pub mod seed_scan;
pub mod window;

pub use error::{ScanError, ScanResult};
pub use region_scan::{RegionGridScanner, ScanReport, StructureHit};
pub use seed_scan::{SeedMatch, SeedScanner};
pub use window::{RegionIter, RegionWindow};
