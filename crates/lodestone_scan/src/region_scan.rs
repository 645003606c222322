//! # Region Grid Scanner
//!
//! Exhaustively enumerates structure candidates within a block radius of
//! an origin, for one fixed seed.
//!
//! Per region the scan applies three filters in order, each a silent skip:
//! 1. the region generated a candidate at all;
//! 2. the candidate's squared XZ distance is within the radius;
//! 3. biome conditions at the candidate permit the structure.
//!
//! Every survivor is emitted in enumeration order; there is no early
//! termination.

use crate::error::ScanResult;
use crate::window::RegionWindow;
use lodestone_shared::{
    dist_sq_xz, sq, ColumnPos, Dimension, McVersion, Seed, BLOCKS_PER_CHUNK, MAX_RADIUS_CHUNKS,
};
use lodestone_worldgen::{structure_pos_in_region, Generator, StructureType, ViabilityFlags};

/// One accepted structure candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructureHit {
    /// The structure type scanned for.
    pub structure: StructureType,
    /// The region the candidate came from.
    pub region: (i32, i32),
    /// Candidate block column.
    pub pos: ColumnPos,
    /// Squared XZ block distance from the scan origin.
    pub distance_sq: i64,
}

/// The aggregate outcome of one region scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanReport {
    /// The origin the radius was measured from.
    pub origin: ColumnPos,
    /// The radius, in blocks.
    pub radius_blocks: i64,
    /// Number of regions enumerated (window size).
    pub regions_scanned: u64,
    /// Accepted candidates, in enumeration order.
    pub hits: Vec<StructureHit>,
}

/// Enumerates viable structure candidates around an origin.
#[derive(Clone, Copy, Debug)]
pub struct RegionGridScanner {
    /// The structure type to place.
    structure: StructureType,
    /// Generation version.
    version: McVersion,
    /// Scan radius, in chunks.
    radius_chunks: i32,
    /// Viability modifiers; `NONE` for every type's default behaviour.
    flags: ViabilityFlags,
}

impl RegionGridScanner {
    /// Creates a scanner with the default radius
    /// ([`lodestone_shared::DEFAULT_RADIUS_CHUNKS`]) and no flags.
    #[must_use]
    pub const fn new(structure: StructureType, version: McVersion) -> Self {
        Self {
            structure,
            version,
            radius_chunks: lodestone_shared::DEFAULT_RADIUS_CHUNKS,
            flags: ViabilityFlags::NONE,
        }
    }

    /// Sets the scan radius in chunks.
    ///
    /// Clamped to [`MAX_RADIUS_CHUNKS`]: beyond the world border the extra
    /// radius finds nothing, and the squared block distance would no longer
    /// fit in `i64`.
    #[must_use]
    pub const fn with_radius_chunks(mut self, radius_chunks: i32) -> Self {
        self.radius_chunks = if radius_chunks > MAX_RADIUS_CHUNKS {
            MAX_RADIUS_CHUNKS
        } else {
            radius_chunks
        };
        self
    }

    /// Sets the viability flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: ViabilityFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Runs the scan for one seed.
    ///
    /// `origin` overrides the scan center; `None` uses the world spawn of
    /// the seeded generator, matching the usual "portals near spawn" use.
    ///
    /// # Errors
    ///
    /// [`crate::ScanError::Worldgen`] with `StructureConfigMissing` when
    /// the structure type is undefined for the version; this aborts before
    /// any region iteration. Other oracle errors cannot occur: the seed is
    /// applied before any query.
    pub fn run(&self, seed: Seed, origin: Option<ColumnPos>) -> ScanResult<ScanReport> {
        // Preconditions first: a missing config must fail before the seed
        // is even applied.
        let mut generator = Generator::new(self.version);
        let config = generator.structure_config(self.structure)?;
        generator.apply_seed(Dimension::Overworld, seed);

        let origin = match origin {
            Some(origin) => origin,
            None => generator.spawn_point()?,
        };

        let radius_blocks = i64::from(self.radius_chunks) * i64::from(BLOCKS_PER_CHUNK);
        let radius_sq = sq(radius_blocks);
        let window = RegionWindow::around(origin, radius_blocks, config.region_blocks());

        tracing::debug!(
            structure = %self.structure,
            version = %self.version,
            seed = seed.value(),
            origin_x = origin.x,
            origin_z = origin.z,
            radius_blocks,
            regions = window.region_count(),
            "region scan started"
        );

        let mut hits = Vec::new();
        for (rx, rz) in &window {
            let Some(pos) = structure_pos_in_region(self.structure, &config, seed, rx, rz)
            else {
                // Expected: not every region generates a candidate.
                continue;
            };

            let distance_sq = dist_sq_xz(pos, origin);
            if distance_sq > radius_sq {
                tracing::trace!(rx, rz, distance_sq, "candidate outside radius");
                continue;
            }

            if !generator.is_viable(self.structure, pos.x, pos.z, self.flags)? {
                tracing::trace!(rx, rz, x = pos.x, z = pos.z, "candidate not viable");
                continue;
            }

            hits.push(StructureHit {
                structure: self.structure,
                region: (rx, rz),
                pos,
                distance_sq,
            });
        }

        tracing::debug!(found = hits.len(), "region scan finished");

        Ok(ScanReport {
            origin,
            radius_blocks,
            regions_scanned: window.region_count(),
            hits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use lodestone_worldgen::WorldgenError;

    #[test]
    fn test_missing_config_fails_before_iteration() {
        let scanner = RegionGridScanner::new(StructureType::RuinedPortal, McVersion::V1_14);
        let err = scanner.run(Seed::new(0), None).unwrap_err();
        assert_eq!(
            err,
            ScanError::Worldgen(WorldgenError::StructureConfigMissing {
                structure: StructureType::RuinedPortal,
                version: McVersion::V1_14,
            })
        );
    }

    #[test]
    fn test_hits_respect_radius_boundary() {
        let scanner =
            RegionGridScanner::new(StructureType::RuinedPortal, McVersion::V1_18)
                .with_radius_chunks(200);
        let report = scanner
            .run(Seed::new(42), Some(ColumnPos::ORIGIN))
            .expect("config exists");

        let radius_sq = sq(report.radius_blocks);
        for hit in &report.hits {
            assert!(
                hit.distance_sq <= radius_sq,
                "hit at {:?} beyond radius: {} > {radius_sq}",
                hit.pos,
                hit.distance_sq
            );
            assert_eq!(hit.distance_sq, dist_sq_xz(hit.pos, report.origin));
        }
    }

    #[test]
    fn test_idempotent_reruns() {
        let scanner = RegionGridScanner::new(StructureType::Village, McVersion::V1_20)
            .with_radius_chunks(150);
        let first = scanner
            .run(Seed::new(987), Some(ColumnPos::new(-300, 800)))
            .expect("config exists");
        let second = scanner
            .run(Seed::new(987), Some(ColumnPos::new(-300, 800)))
            .expect("config exists");
        assert_eq!(first, second, "identical inputs must yield identical reports");
    }

    #[test]
    fn test_hits_are_in_enumeration_order() {
        let scanner = RegionGridScanner::new(StructureType::RuinedPortal, McVersion::V1_20)
            .with_radius_chunks(400);
        let report = scanner
            .run(Seed::new(7), Some(ColumnPos::ORIGIN))
            .expect("config exists");

        // Row-major: (rz, rx) lexicographic, strictly increasing.
        let regions: Vec<(i32, i32)> =
            report.hits.iter().map(|h| (h.region.1, h.region.0)).collect();
        let mut sorted = regions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(regions, sorted, "hits must follow window enumeration order");
    }

    #[test]
    fn test_spawn_origin_is_used_when_none() {
        let scanner = RegionGridScanner::new(StructureType::Village, McVersion::V1_18)
            .with_radius_chunks(100);
        let report = scanner.run(Seed::new(2), None).expect("config exists");

        let mut generator = Generator::new(McVersion::V1_18);
        generator.apply_seed(Dimension::Overworld, Seed::new(2));
        let spawn = generator.spawn_point().expect("seeded");
        assert_eq!(report.origin, spawn);
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let scanner = RegionGridScanner::new(StructureType::RuinedPortal, McVersion::V1_20)
            .with_radius_chunks(i32::MAX);
        assert_eq!(scanner.radius_chunks, MAX_RADIUS_CHUNKS);

        let radius_blocks =
            i64::from(scanner.radius_chunks) * i64::from(BLOCKS_PER_CHUNK);
        assert!(
            radius_blocks.checked_mul(radius_blocks).is_some(),
            "squared clamped radius must fit in i64"
        );
    }

    #[test]
    fn test_zero_radius_scan_is_exhaustive_but_tiny() {
        let scanner = RegionGridScanner::new(StructureType::Monument, McVersion::V1_18)
            .with_radius_chunks(0);
        let report = scanner
            .run(Seed::new(5), Some(ColumnPos::ORIGIN))
            .expect("config exists");
        // 5x5 window from padding alone.
        assert_eq!(report.regions_scanned, 25);
        for hit in &report.hits {
            assert_eq!(hit.distance_sq, 0, "only the origin itself is in radius");
        }
    }
}
