//! # Biome Classification
//!
//! Determines the biome at a point from seeded climate channels.
//!
//! The model uses four independent noise channels derived from the world
//! seed:
//! - Elevation (continental shape, also drives ocean/land/mountain splits)
//! - Temperature (damped by altitude on versions with depth climate)
//! - Humidity
//! - Weirdness (rare-biome selector, e.g. mushroom fields)

use crate::noise::SimplexField;
use lodestone_shared::{McVersion, Seed, BIOME_CELL_BLOCKS, SEA_LEVEL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A biome name that is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown biome: {0}")]
pub struct UnknownBiome(pub String);

/// Biome identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Biome {
    /// Deep ocean (elevation < -0.5)
    DeepOcean = 0,
    /// Shallow ocean
    Ocean = 1,
    /// Beach/coastline
    Beach = 2,
    /// Plains/grassland
    Plains = 3,
    /// Forest
    Forest = 4,
    /// Dense jungle
    Jungle = 5,
    /// Arid desert
    Desert = 6,
    /// Cold tundra
    Tundra = 7,
    /// Snowy taiga forest
    Taiga = 8,
    /// High mountains
    Mountains = 9,
    /// Snowy peaks
    SnowyPeaks = 10,
    /// Swamp/wetland
    Swamp = 11,
    /// Savanna grassland
    Savanna = 12,
    /// Eroded badlands
    Badlands = 13,
    /// Mushroom fields - rare offshore islands
    MushroomFields = 14,
}

impl Biome {
    /// Whether this biome is open water.
    #[must_use]
    pub const fn is_ocean(self) -> bool {
        matches!(self, Self::DeepOcean | Self::Ocean)
    }

    /// The canonical lower-snake-case name, e.g. `"mushroom_fields"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeepOcean => "deep_ocean",
            Self::Ocean => "ocean",
            Self::Beach => "beach",
            Self::Plains => "plains",
            Self::Forest => "forest",
            Self::Jungle => "jungle",
            Self::Desert => "desert",
            Self::Tundra => "tundra",
            Self::Taiga => "taiga",
            Self::Mountains => "mountains",
            Self::SnowyPeaks => "snowy_peaks",
            Self::Swamp => "swamp",
            Self::Savanna => "savanna",
            Self::Badlands => "badlands",
            Self::MushroomFields => "mushroom_fields",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Biome {
    type Err = UnknownBiome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deep_ocean" => Ok(Self::DeepOcean),
            "ocean" => Ok(Self::Ocean),
            "beach" => Ok(Self::Beach),
            "plains" => Ok(Self::Plains),
            "forest" => Ok(Self::Forest),
            "jungle" => Ok(Self::Jungle),
            "desert" => Ok(Self::Desert),
            "tundra" => Ok(Self::Tundra),
            "taiga" => Ok(Self::Taiga),
            "mountains" => Ok(Self::Mountains),
            "snowy_peaks" => Ok(Self::SnowyPeaks),
            "swamp" => Ok(Self::Swamp),
            "savanna" => Ok(Self::Savanna),
            "badlands" => Ok(Self::Badlands),
            "mushroom_fields" => Ok(Self::MushroomFields),
            other => Err(UnknownBiome(other.to_owned())),
        }
    }
}

/// Sampling granularity for biome queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scale {
    /// One sample per block.
    Block,
    /// One sample per 4x4x4-block biome cell.
    #[default]
    Biome,
}

impl Scale {
    /// Block span of one sample at this scale.
    #[must_use]
    pub const fn blocks(self) -> i32 {
        match self {
            Self::Block => 1,
            Self::Biome => BIOME_CELL_BLOCKS,
        }
    }

    /// Converts a coordinate at this scale to the block coordinate of the
    /// sample point (cell center for biome scale).
    #[must_use]
    pub const fn to_block(self, coord: i32) -> i32 {
        let span = self.blocks();
        coord * span + span / 2
    }
}

/// Climate-model biome classifier for one (version, seed) pair.
///
/// Rebuilt from scratch whenever a seed is applied; never mutated
/// incrementally.
pub struct ClimateModel {
    /// Continental elevation channel.
    elevation: SimplexField,
    /// Temperature channel.
    temperature: SimplexField,
    /// Humidity channel.
    humidity: SimplexField,
    /// Rare-biome selector channel.
    weirdness: SimplexField,
    /// Whether altitude damps temperature (1.18+ depth climate).
    depth_climate: bool,
}

impl ClimateModel {
    /// Scale for the elevation channel (larger = bigger landmasses).
    const ELEVATION_SCALE: f64 = 0.0025;
    /// Scale for the temperature channel.
    const TEMPERATURE_SCALE: f64 = 0.002;
    /// Scale for the humidity channel.
    const HUMIDITY_SCALE: f64 = 0.003;
    /// Scale for the weirdness channel.
    const WEIRDNESS_SCALE: f64 = 0.005;
    /// Weirdness threshold above which offshore cells become mushroom fields.
    const MUSHROOM_THRESHOLD: f64 = 0.78;
    /// Temperature lost per block of altitude above sea level (depth climate).
    const ALTITUDE_LAPSE: f64 = 0.004;

    /// Builds a classifier for a version and seed.
    #[must_use]
    pub fn new(version: McVersion, seed: Seed) -> Self {
        Self {
            elevation: SimplexField::new(seed.derive(1)),
            temperature: SimplexField::new(seed.derive(2)),
            humidity: SimplexField::new(seed.derive(3)),
            weirdness: SimplexField::new(seed.derive(4)),
            depth_climate: version.has_depth_climate(),
        }
    }

    /// Elevation at a block column, in `[-1, 1]`.
    ///
    /// Negative values are under water; above 0.7 is mountainous.
    #[must_use]
    pub fn elevation(&self, x: f64, z: f64) -> f64 {
        self.elevation
            .octaved(x * Self::ELEVATION_SCALE, z * Self::ELEVATION_SCALE, 4, 0.5, 2.0)
    }

    /// Temperature at a block position, in `[-1, 1]`.
    ///
    /// On depth-climate versions, altitude above sea level cools the
    /// sample; older versions ignore `y` entirely.
    #[must_use]
    pub fn temperature(&self, x: f64, z: f64, y: i32) -> f64 {
        let base = self
            .temperature
            .sample(x * Self::TEMPERATURE_SCALE, z * Self::TEMPERATURE_SCALE);

        let altitude_penalty = if self.depth_climate {
            f64::from((y - SEA_LEVEL).max(0)) * Self::ALTITUDE_LAPSE
        } else {
            0.0
        };

        (base - altitude_penalty).clamp(-1.0, 1.0)
    }

    /// Humidity at a block column, in `[-1, 1]`.
    #[must_use]
    pub fn humidity(&self, x: f64, z: f64) -> f64 {
        self.humidity
            .octaved(x * Self::HUMIDITY_SCALE, z * Self::HUMIDITY_SCALE, 3, 0.5, 2.0)
    }

    /// Classifies the biome at a block position.
    #[must_use]
    pub fn classify(&self, x: i32, y: i32, z: i32) -> Biome {
        let fx = f64::from(x);
        let fz = f64::from(z);

        let elevation = self.elevation(fx, fz);
        let temperature = self.temperature(fx, fz, y);
        let humidity = self.humidity(fx, fz);
        let weirdness = self
            .weirdness
            .sample(fx * Self::WEIRDNESS_SCALE, fz * Self::WEIRDNESS_SCALE);

        // Mushroom fields: shallow offshore cells with extreme weirdness.
        if weirdness > Self::MUSHROOM_THRESHOLD && (-0.45..-0.05).contains(&elevation) {
            return Biome::MushroomFields;
        }

        if elevation < -0.5 {
            return Biome::DeepOcean;
        }
        if elevation < -0.2 {
            return Biome::Ocean;
        }
        if elevation < -0.1 {
            return Biome::Beach;
        }

        if elevation > 0.7 {
            if temperature < -0.2 {
                return Biome::SnowyPeaks;
            }
            return Biome::Mountains;
        }

        match (temperature, humidity) {
            // Cold band
            (t, _) if t < -0.5 => Biome::Tundra,
            (t, h) if t < -0.2 && h > 0.0 => Biome::Taiga,
            (t, _) if t < -0.2 => Biome::Tundra,

            // Hot band
            (t, h) if t > 0.5 && h < -0.3 => Biome::Desert,
            (t, h) if t > 0.5 && h > 0.5 => Biome::Jungle,
            (t, _) if t > 0.6 => Biome::Badlands,
            (t, h) if t > 0.3 && h < 0.0 => Biome::Savanna,

            // Temperate band
            (_, h) if h > 0.5 && elevation < 0.1 => Biome::Swamp,
            (_, h) if h > 0.2 => Biome::Forest,

            _ => Biome::Plains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_determinism() {
        let a = ClimateModel::new(McVersion::V1_18, Seed::new(42));
        let b = ClimateModel::new(McVersion::V1_18, Seed::new(42));

        for i in 0..100 {
            let x = i * 97;
            let z = i * 131;
            assert_eq!(
                a.classify(x, SEA_LEVEL, z),
                b.classify(x, SEA_LEVEL, z),
                "classification must be deterministic"
            );
        }
    }

    #[test]
    fn test_many_biomes_reachable() {
        let model = ClimateModel::new(McVersion::V1_18, Seed::new(12345));
        let mut found = std::collections::HashSet::new();

        for x in (-4000..4000).step_by(64) {
            for z in (-4000..4000).step_by(64) {
                found.insert(model.classify(x, SEA_LEVEL, z));
            }
        }

        assert!(found.len() >= 6, "expected a varied map, found only {found:?}");
    }

    #[test]
    fn test_altitude_cools_depth_climate_versions() {
        let modern = ClimateModel::new(McVersion::V1_18, Seed::new(7));
        let legacy = ClimateModel::new(McVersion::V1_16, Seed::new(7));

        let (x, z) = (1000.0, -2000.0);
        let high = SEA_LEVEL + 200;

        assert!(modern.temperature(x, z, high) < modern.temperature(x, z, SEA_LEVEL));
        assert_eq!(
            legacy.temperature(x, z, high),
            legacy.temperature(x, z, SEA_LEVEL),
            "pre-1.18 climate ignores altitude"
        );
    }

    #[test]
    fn test_scale_to_block_centers_cells() {
        assert_eq!(Scale::Block.to_block(10), 10);
        assert_eq!(Scale::Biome.to_block(0), 2);
        assert_eq!(Scale::Biome.to_block(-1), -2);
        assert_eq!(Scale::Biome.to_block(3), 14);
    }

    #[test]
    fn test_biome_name_round_trip() {
        for biome in [
            Biome::DeepOcean,
            Biome::Plains,
            Biome::MushroomFields,
            Biome::SnowyPeaks,
        ] {
            let parsed: Biome = biome.as_str().parse().expect("own name must parse");
            assert_eq!(parsed, biome);
        }
        assert!("nether_wastes".parse::<Biome>().is_err());
    }
}
