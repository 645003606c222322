//! # find_biome
//!
//! Scans seeds upward from a starting point until the world origin column
//! has a target biome.
//!
//! ```bash
//! find_biome [version] [biome] [start_seed] [budget]
//!
//! # First seed with mushroom fields at the origin, 1.18 generation:
//! find_biome 1.18 mushroom_fields
//! ```
//!
//! The scan always carries an explicit seed budget (default 1048576); an
//! impossible predicate terminates with a notice instead of spinning
//! forever.

use lodestone::{EXIT_BAD_VERSION, EXIT_USAGE};
use lodestone_scan::SeedScanner;
use lodestone_shared::{BlockPos, McVersion, Seed, SEA_LEVEL};
use lodestone_worldgen::{Biome, Scale};
use std::process;
use std::str::FromStr;

/// Seeds probed when no budget argument is given.
const DEFAULT_BUDGET: u64 = 1 << 20;

/// Prints the usage banner to stderr.
fn usage(program: &str) {
    eprintln!("Usage: {program} [version] [biome] [start_seed] [budget]");
    eprintln!("  defaults: version 1.18, biome mushroom_fields, start 0, budget {DEFAULT_BUDGET}");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "find_biome".to_owned());

    let version = match args.get(1) {
        Some(raw) => match McVersion::from_str(raw) {
            Ok(version) => version,
            Err(err) => {
                eprintln!("{err}");
                process::exit(EXIT_BAD_VERSION);
            }
        },
        None => McVersion::V1_18,
    };

    let target = match args.get(2) {
        Some(raw) => match Biome::from_str(raw) {
            Ok(biome) => biome,
            Err(err) => {
                eprintln!("{err}");
                process::exit(EXIT_BAD_VERSION);
            }
        },
        None => Biome::MushroomFields,
    };

    let start = match args.get(3) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => Seed::new(seed),
            Err(_) => {
                eprintln!("Could not parse start seed '{raw}'");
                usage(&program);
                process::exit(EXIT_USAGE);
            }
        },
        None => Seed::new(0),
    };

    let budget = match args.get(4) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(budget) => budget,
            Err(_) => {
                eprintln!("Could not parse budget '{raw}'");
                usage(&program);
                process::exit(EXIT_USAGE);
            }
        },
        None => DEFAULT_BUDGET,
    };

    let pos = BlockPos::new(0, SEA_LEVEL, 0);
    let scanner = SeedScanner::new(version, pos, Scale::Block, target);

    match scanner.scan_from(start, budget) {
        Ok(Some(found)) => {
            println!(
                "Seed {} has a {} biome at block position ({}, {}).",
                found.seed.value(),
                found.biome,
                found.pos.x,
                found.pos.z
            );
        }
        Ok(None) => {
            eprintln!(
                "No seed in [{}, {}) has {target} at ({}, {}); raise the budget to keep looking.",
                start.value(),
                start.value().saturating_add(budget),
                pos.x,
                pos.z
            );
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(EXIT_USAGE);
        }
    }
}
