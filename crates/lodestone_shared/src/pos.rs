//! Coordinate types shared between the oracle and the scanners.
//!
//! These are the canonical representations used across crate boundaries.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A block column position in the XZ plane.
///
/// Structure candidates and scan origins live here; the Y coordinate is
/// irrelevant to placement and distance filtering.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct ColumnPos {
    /// Block X coordinate
    pub x: i32,
    /// Block Z coordinate
    pub z: i32,
}

impl ColumnPos {
    /// Creates a new column position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The world origin column.
    pub const ORIGIN: Self = Self::new(0, 0);
}

/// A full block position, used for single-point biome queries.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct BlockPos {
    /// Block X coordinate
    pub x: i32,
    /// Block Y coordinate (height)
    pub y: i32,
    /// Block Z coordinate
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Drops the Y coordinate.
    #[must_use]
    pub const fn column(self) -> ColumnPos {
        ColumnPos::new(self.x, self.z)
    }
}
