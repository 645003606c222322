//! # LODESTONE Shared
//!
//! Common types used by the world-generation oracle and the scanners.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - noise generation
//! - structure placement
//! - anything that knows what a biome looks like
//!
//! If you need generation logic, put it in `lodestone_worldgen`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;
pub mod pos;
pub mod seed;
pub mod version;

pub use constants::{
    BIOME_CELL_BLOCKS, BLOCKS_PER_CHUNK, DEFAULT_RADIUS_CHUNKS, MAX_RADIUS_CHUNKS, SEA_LEVEL,
};
pub use math::{dist_sq_xz, sq};
pub use pos::{BlockPos, ColumnPos};
pub use seed::Seed;
pub use version::{Dimension, McVersion, UnsupportedVersion};
