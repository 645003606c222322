//! # Structure Placement
//!
//! Salted per-region placement hashing.
//!
//! Each structure type partitions the world into square regions measured in
//! chunks. A region seed is mixed from the world seed, the region
//! coordinates and a per-type salt, then a Java-compatible LCG draws the
//! chunk offset of the candidate inside the region. One region yields at
//! most one candidate; some types can yield none.

use lodestone_shared::{ColumnPos, McVersion, Seed, BLOCKS_PER_CHUNK};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Region-coordinate mixing constant for the X axis.
const REGION_MIX_X: i64 = 341_873_128_712;
/// Region-coordinate mixing constant for the Z axis.
const REGION_MIX_Z: i64 = 132_897_987_541;

/// A structure name that is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown structure: {0}")]
pub struct UnknownStructure(pub String);

/// Structure types with placement configs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureType {
    /// Ruined portal (1.16+), generates almost anywhere on land.
    RuinedPortal,
    /// Village, land settlements in open biomes.
    Village,
    /// Desert pyramid.
    DesertPyramid,
    /// Pillager outpost; regions roll for presence and usually come up empty.
    Outpost,
    /// Ocean monument; triangular offset distribution pulls candidates
    /// toward region centers.
    Monument,
}

impl StructureType {
    /// All placeable structure types.
    pub const ALL: [Self; 5] = [
        Self::RuinedPortal,
        Self::Village,
        Self::DesertPyramid,
        Self::Outpost,
        Self::Monument,
    ];

    /// The canonical lower-snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RuinedPortal => "ruined_portal",
            Self::Village => "village",
            Self::DesertPyramid => "desert_pyramid",
            Self::Outpost => "outpost",
            Self::Monument => "monument",
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureType {
    type Err = UnknownStructure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ruined_portal" => Ok(Self::RuinedPortal),
            "village" => Ok(Self::Village),
            "desert_pyramid" => Ok(Self::DesertPyramid),
            "outpost" => Ok(Self::Outpost),
            "monument" => Ok(Self::Monument),
            other => Err(UnknownStructure(other.to_owned())),
        }
    }
}

/// How the chunk offset inside a region is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetDistribution {
    /// One uniform draw per axis.
    Uniform,
    /// Average of two uniform draws per axis; biases toward region centers.
    Triangular,
}

/// Immutable placement parameters for one (structure type, version) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructureConfig {
    /// Region edge length, in chunks.
    pub region_size: i32,
    /// Placement freedom inside the region, in chunks.
    ///
    /// Invariant: `chunk_range <= region_size`, so a candidate never leaves
    /// its region; the scanner's fixed window padding relies on this.
    pub chunk_range: i32,
    /// Per-type seed salt.
    pub salt: i64,
    /// Offset draw distribution.
    pub distribution: OffsetDistribution,
}

impl StructureConfig {
    /// Region edge length, in blocks.
    #[must_use]
    pub const fn region_blocks(self) -> i64 {
        self.region_size as i64 * BLOCKS_PER_CHUNK as i64
    }
}

/// Looks up the placement config for a structure type at a version.
///
/// Returns `None` when the type is undefined for the version (ruined
/// portals predate 1.16, for example). Callers treat this as fatal before
/// any region iteration begins; the generator wraps it into
/// [`crate::WorldgenError::StructureConfigMissing`].
#[must_use]
pub fn structure_config(structure: StructureType, version: McVersion) -> Option<StructureConfig> {
    let config = match structure {
        StructureType::RuinedPortal => {
            if version < McVersion::V1_16 {
                return None;
            }
            StructureConfig {
                region_size: 40,
                chunk_range: 25,
                salt: 34_222_645,
                distribution: OffsetDistribution::Uniform,
            }
        }
        StructureType::Village => {
            // 1.14 used the tighter pre-nether-update spacing.
            let (region_size, chunk_range) = if version == McVersion::V1_14 {
                (32, 24)
            } else {
                (34, 26)
            };
            StructureConfig {
                region_size,
                chunk_range,
                salt: 10_387_312,
                distribution: OffsetDistribution::Uniform,
            }
        }
        StructureType::DesertPyramid => StructureConfig {
            region_size: 32,
            chunk_range: 24,
            salt: 14_357_617,
            distribution: OffsetDistribution::Uniform,
        },
        StructureType::Outpost => StructureConfig {
            region_size: 32,
            chunk_range: 24,
            salt: 165_745_296,
            distribution: OffsetDistribution::Uniform,
        },
        StructureType::Monument => StructureConfig {
            region_size: 32,
            chunk_range: 27,
            salt: 10_387_313,
            distribution: OffsetDistribution::Triangular,
        },
    };
    Some(config)
}

/// Candidate structure position for one region, or `None` when the region
/// generates nothing or its candidate column falls outside the
/// representable block range.
///
/// Deterministic in (structure, config, seed, rx, rz). The returned column
/// is the center of the candidate chunk.
#[must_use]
pub fn structure_pos_in_region(
    structure: StructureType,
    config: &StructureConfig,
    seed: Seed,
    rx: i32,
    rz: i32,
) -> Option<ColumnPos> {
    let region_seed = i64::from(rx)
        .wrapping_mul(REGION_MIX_X)
        .wrapping_add(i64::from(rz).wrapping_mul(REGION_MIX_Z))
        .wrapping_add(seed.as_i64())
        .wrapping_add(config.salt);

    let mut rng = RegionRng::new(region_seed);

    let offset_x = draw_offset(&mut rng, config);
    let offset_z = draw_offset(&mut rng, config);

    // Outposts roll for presence after the offsets; four in five regions
    // stay empty.
    if structure == StructureType::Outpost && rng.next_int(5) != 0 {
        return None;
    }

    let chunk_x = i64::from(rx) * i64::from(config.region_size) + i64::from(offset_x);
    let chunk_z = i64::from(rz) * i64::from(config.region_size) + i64::from(offset_z);

    let x = i32::try_from(chunk_x * i64::from(BLOCKS_PER_CHUNK) + 8).ok()?;
    let z = i32::try_from(chunk_z * i64::from(BLOCKS_PER_CHUNK) + 8).ok()?;
    Some(ColumnPos::new(x, z))
}

/// Draws one chunk offset according to the config's distribution.
fn draw_offset(rng: &mut RegionRng, config: &StructureConfig) -> i32 {
    match config.distribution {
        OffsetDistribution::Uniform => rng.next_int(config.chunk_range),
        OffsetDistribution::Triangular => {
            (rng.next_int(config.chunk_range) + rng.next_int(config.chunk_range)) / 2
        }
    }
}

/// Java-compatible 48-bit LCG.
///
/// Placement must reproduce the reference behaviour bit for bit, so this
/// mirrors `java.util.Random` exactly (including the rejection loop in
/// `next_int`).
pub struct RegionRng {
    /// Current 48-bit state.
    state: i64,
}

impl RegionRng {
    /// LCG multiplier.
    const MULTIPLIER: i64 = 0x5DEE_CE66D;
    /// LCG addend.
    const ADDEND: i64 = 0xB;
    /// 48-bit state mask.
    const MASK: i64 = (1_i64 << 48) - 1;

    /// Seeds the generator, scrambling the input like `Random::setSeed`.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self {
            state: (seed ^ Self::MULTIPLIER) & Self::MASK,
        }
    }

    /// Advances the state and returns the top `bits` bits.
    fn next(&mut self, bits: u32) -> i32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::ADDEND)
            & Self::MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform draw in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive; placement configs guarantee it is.
    pub fn next_int(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");
        if bound & (bound - 1) == 0 {
            // Power of two: take the top bits directly.
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }
        loop {
            let bits = self.next(31);
            let value = bits % bound;
            // Reject draws from the incomplete final cycle; the reference
            // detects them through 32-bit signed overflow, so the wrap is
            // deliberate.
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }
}
