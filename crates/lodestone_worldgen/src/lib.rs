//! # LODESTONE Worldgen
//!
//! The deterministic world-generation oracle the scanners query.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed + version always produces the same answers
//! 2. **Pure**: every query is side-effect free; repeat calls are identical
//! 3. **Seed-explicit**: a [`Generator`] answers nothing until a seed is
//!    applied, and reports [`WorldgenError::SeedNotApplied`] instead of
//!    guessing
//!
//! ## Core Components
//!
//! - [`SimplexField`]: seeded 2D noise channel
//! - [`ClimateModel`]: version-aware biome classification
//! - [`Generator`]: per-invocation generation context (biome, spawn,
//!   viability queries)
//! - [`structure_config`] / [`structure_pos_in_region`]: salted per-region
//!   structure placement
//!
//! ## Example
//!
//! ```rust,ignore
//! use lodestone_shared::{Dimension, McVersion, Seed};
//! use lodestone_worldgen::{Generator, Scale};
//!
//! let mut generator = Generator::new(McVersion::V1_18);
//! generator.apply_seed(Dimension::Overworld, Seed::new(12345));
//!
//! let biome = generator.biome_at(Scale::Block, 0, 63, 0)?;
//! let spawn = generator.spawn_point()?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod biome;
pub mod error;
pub mod generator;
pub mod noise;
pub mod placement;

pub use biome::{Biome, ClimateModel, Scale, UnknownBiome};
pub use error::{WorldgenError, WorldgenResult};
pub use generator::{Generator, ViabilityFlags};
pub use noise::SimplexField;
pub use placement::{
    structure_config, structure_pos_in_region, RegionRng, StructureConfig, StructureType,
    UnknownStructure,
};
