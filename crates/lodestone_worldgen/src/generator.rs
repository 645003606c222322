//! # Generation Context
//!
//! The per-invocation oracle the scanners query.
//!
//! A [`Generator`] is version-pinned at construction and answers nothing
//! until [`Generator::apply_seed`] binds a seed. Applying a seed rebuilds
//! the climate model wholesale; state is never mutated incrementally, so a
//! generator can be re-seeded any number of times (the seed-scan loop does
//! exactly that).

use crate::biome::{Biome, ClimateModel, Scale};
use crate::error::{WorldgenError, WorldgenResult};
use crate::placement::{structure_config, StructureConfig, StructureType};
use lodestone_shared::{ColumnPos, Dimension, McVersion, Seed, SEA_LEVEL};
use serde::{Deserialize, Serialize};

/// Structure-type-specific viability modifiers.
///
/// `NONE` (all bits clear) is the correct default for every type; ruined
/// portals in particular need no flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViabilityFlags(pub u32);

impl ViabilityFlags {
    /// Default behaviour: the structure's own biome set applies.
    pub const NONE: Self = Self(0);

    /// Skip the biome check entirely; every generated candidate is viable.
    pub const ALLOW_ANY_BIOME: Self = Self(1);

    /// Whether all bits of `flag` are set.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }
}

/// Seed-dependent generation state, rebuilt on every seed application.
struct SeededState {
    /// The bound seed.
    seed: Seed,
    /// The bound dimension.
    dimension: Dimension,
    /// Climate channels derived from the seed.
    climate: ClimateModel,
}

/// A version-pinned generation context.
///
/// Owns its state exclusively: concurrent scans must each construct their
/// own `Generator` rather than sharing one.
pub struct Generator {
    /// The pinned generation version.
    version: McVersion,
    /// Present once a seed has been applied.
    seeded: Option<SeededState>,
}

impl Generator {
    /// Maximum spawn-search ring radius, in biome cells.
    const SPAWN_SEARCH_CELLS: i32 = 64;

    /// Creates an unseeded generator for a version.
    #[must_use]
    pub const fn new(version: McVersion) -> Self {
        Self {
            version,
            seeded: None,
        }
    }

    /// The pinned version.
    #[must_use]
    pub const fn version(&self) -> McVersion {
        self.version
    }

    /// The currently applied seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<Seed> {
        self.seeded.as_ref().map(|s| s.seed)
    }

    /// The currently applied dimension, if any.
    #[must_use]
    pub fn dimension(&self) -> Option<Dimension> {
        self.seeded.as_ref().map(|s| s.dimension)
    }

    /// Binds a seed and dimension to this generator.
    ///
    /// Total for all 64-bit seeds. Replaces any previously applied state.
    pub fn apply_seed(&mut self, dimension: Dimension, seed: Seed) {
        self.seeded = Some(SeededState {
            seed,
            dimension,
            climate: ClimateModel::new(self.version, seed),
        });
    }

    /// Climate model, or the query-before-seed error.
    fn climate(&self) -> WorldgenResult<&ClimateModel> {
        self.seeded
            .as_ref()
            .map(|s| &s.climate)
            .ok_or(WorldgenError::SeedNotApplied)
    }

    /// The biome at a position, sampled at the given scale.
    ///
    /// Coordinates are given at the query scale: at [`Scale::Biome`] one
    /// unit is a 4x4x4-block cell and the sample is taken at the cell
    /// center.
    ///
    /// # Errors
    ///
    /// [`WorldgenError::SeedNotApplied`] if no seed is bound.
    pub fn biome_at(&self, scale: Scale, x: i32, y: i32, z: i32) -> WorldgenResult<Biome> {
        let climate = self.climate()?;
        Ok(climate.classify(scale.to_block(x), scale.to_block(y), scale.to_block(z)))
    }

    /// The deterministic world spawn column.
    ///
    /// Searches outward from the origin in square rings of biome cells and
    /// returns the center of the first land cell; falls back to the origin
    /// column if none is found within the search budget.
    ///
    /// # Errors
    ///
    /// [`WorldgenError::SeedNotApplied`] if no seed is bound.
    pub fn spawn_point(&self) -> WorldgenResult<ColumnPos> {
        let climate = self.climate()?;
        let sea_cell = SEA_LEVEL / Scale::Biome.blocks();

        for ring in 0..=Self::SPAWN_SEARCH_CELLS {
            for cz in -ring..=ring {
                for cx in -ring..=ring {
                    // Perimeter cells only; the interior was covered by
                    // smaller rings.
                    if cx.abs() != ring && cz.abs() != ring {
                        continue;
                    }
                    let biome = climate.classify(
                        Scale::Biome.to_block(cx),
                        Scale::Biome.to_block(sea_cell),
                        Scale::Biome.to_block(cz),
                    );
                    if !biome.is_ocean() {
                        let spawn =
                            ColumnPos::new(Scale::Biome.to_block(cx), Scale::Biome.to_block(cz));
                        tracing::debug!(x = spawn.x, z = spawn.z, %biome, "spawn located");
                        return Ok(spawn);
                    }
                }
            }
        }

        tracing::debug!("no land within spawn search budget, defaulting to origin");
        Ok(ColumnPos::ORIGIN)
    }

    /// Placement config for a structure type at this generator's version.
    ///
    /// # Errors
    ///
    /// [`WorldgenError::StructureConfigMissing`] when the type is undefined
    /// for the version.
    pub fn structure_config(&self, structure: StructureType) -> WorldgenResult<StructureConfig> {
        structure_config(structure, self.version).ok_or(WorldgenError::StructureConfigMissing {
            structure,
            version: self.version,
        })
    }

    /// Whether biome conditions at a candidate column permit the structure.
    ///
    /// # Errors
    ///
    /// [`WorldgenError::SeedNotApplied`] if no seed is bound.
    pub fn is_viable(
        &self,
        structure: StructureType,
        x: i32,
        z: i32,
        flags: ViabilityFlags,
    ) -> WorldgenResult<bool> {
        if flags.contains(ViabilityFlags::ALLOW_ANY_BIOME) {
            // Still requires an applied seed; the relaxation is biome-only.
            self.climate()?;
            return Ok(true);
        }

        let cell = Scale::Biome.blocks();
        let biome = self.biome_at(
            Scale::Biome,
            x.div_euclid(cell),
            SEA_LEVEL / cell,
            z.div_euclid(cell),
        )?;

        Ok(match structure {
            StructureType::RuinedPortal => biome != Biome::DeepOcean,
            StructureType::Village | StructureType::Outpost => matches!(
                biome,
                Biome::Plains | Biome::Desert | Biome::Savanna | Biome::Taiga | Biome::Tundra
            ),
            StructureType::DesertPyramid => {
                matches!(biome, Biome::Desert | Biome::Badlands)
            }
            StructureType::Monument => biome.is_ocean(),
        })
    }
}
