//! # World Geometry Constants
//!
//! Fixed granularities of the coordinate system.
//!
//! **CRITICAL:** These values are part of the determinism contract.
//! Changing any of them changes every scan result.

/// Horizontal edge length of a chunk, in blocks.
pub const BLOCKS_PER_CHUNK: i32 = 16;

/// Edge length of one biome sampling cell, in blocks.
///
/// Biome-scale queries collapse a 4x4x4-block cell to a single sample.
pub const BIOME_CELL_BLOCKS: i32 = 4;

/// Nominal sea level, in blocks. Surface queries default to this height.
pub const SEA_LEVEL: i32 = 63;

/// Default structure-scan radius, in chunks.
pub const DEFAULT_RADIUS_CHUNKS: i32 = 1000;

/// Largest meaningful scan radius, in chunks: the 30M-block world border.
///
/// Also the bound that keeps squared block distances inside `i64`; scan
/// radii are clamped to it.
pub const MAX_RADIUS_CHUNKS: i32 = 1_875_000;
