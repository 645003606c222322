//! # find_structures
//!
//! Enumerates every viable structure candidate within a chunk radius of
//! the world spawn, for one seed and version.
//!
//! ```bash
//! find_structures <version> <seed> [radius_chunks] [structure] [--config profile.toml]
//!
//! # Every ruined portal within 1000 chunks of spawn:
//! find_structures 1.20 12345 1000
//! ```
//!
//! One line per hit goes to stdout; the one-line summary goes to stderr so
//! hit lists stay pipeable.

use lodestone::{ScanProfile, EXIT_BAD_VERSION, EXIT_NO_CONFIG, EXIT_USAGE};
use lodestone_scan::{RegionGridScanner, ScanError};
use lodestone_shared::{McVersion, Seed};
use lodestone_worldgen::{StructureType, ViabilityFlags, WorldgenError};
use std::path::Path;
use std::process;
use std::str::FromStr;

/// Prints the usage banner to stderr.
fn usage(program: &str) {
    eprintln!("Usage: {program} <version> <seed> [radius_chunks] [structure] [--config <file>]");
    eprintln!("  version examples: 1.16, 1.18, 1.20, 1.20.6");
    eprintln!("  structure: ruined_portal (default), village, desert_pyramid, outpost, monument");
    eprintln!("  Example: {program} 1.20 12345 1000");
}

fn main() {
    let mut args: Vec<String> = std::env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "find_structures".to_owned());

    // Profile first: command-line positionals override whatever it holds.
    let mut profile = ScanProfile::default();
    if let Some(index) = args.iter().position(|a| a == "--config") {
        if index + 1 >= args.len() {
            eprintln!("--config requires a file path");
            usage(&program);
            process::exit(EXIT_USAGE);
        }
        let path = args.remove(index + 1);
        args.remove(index);
        profile = match ScanProfile::load(Path::new(&path)) {
            Ok(profile) => profile,
            Err(err) => {
                eprintln!("{err}");
                process::exit(EXIT_USAGE);
            }
        };
    }

    if args.len() < 3 {
        usage(&program);
        process::exit(EXIT_USAGE);
    }

    let version = match McVersion::from_str(&args[1]) {
        Ok(version) => version,
        Err(err) => {
            eprintln!("{err}");
            process::exit(EXIT_BAD_VERSION);
        }
    };

    let seed = match args[2].parse::<u64>() {
        Ok(seed) => Seed::new(seed),
        Err(_) => {
            eprintln!("Could not parse seed '{}'", args[2]);
            usage(&program);
            process::exit(EXIT_USAGE);
        }
    };

    let radius_chunks = match args.get(3) {
        Some(raw) => match raw.parse::<i32>() {
            Ok(radius) if radius >= 0 => radius,
            _ => {
                eprintln!("Could not parse radius '{raw}'");
                usage(&program);
                process::exit(EXIT_USAGE);
            }
        },
        None => profile.radius_or_default(),
    };

    let structure_name = args
        .get(4)
        .cloned()
        .or_else(|| profile.structure.clone())
        .unwrap_or_else(|| StructureType::RuinedPortal.as_str().to_owned());
    let structure = match StructureType::from_str(&structure_name) {
        Ok(structure) => structure,
        Err(err) => {
            eprintln!("{err}");
            process::exit(EXIT_BAD_VERSION);
        }
    };

    let flags = ViabilityFlags(profile.flags.unwrap_or(0));

    let scanner = RegionGridScanner::new(structure, version)
        .with_radius_chunks(radius_chunks)
        .with_flags(flags);

    let report = match scanner.run(seed, None) {
        Ok(report) => report,
        Err(ScanError::Worldgen(err)) => {
            match &err {
                WorldgenError::StructureConfigMissing { .. } => {
                    eprintln!("structure config lookup failed: {err}");
                }
                other => eprintln!("{other}"),
            }
            process::exit(EXIT_NO_CONFIG);
        }
    };

    for hit in &report.hits {
        println!("{} x={} z={}", hit.structure, hit.pos.x, hit.pos.z);
    }

    eprintln!(
        "mc={} seed={} spawn=({},{}) radius={} chunks -> {} found",
        version,
        seed.value(),
        report.origin.x,
        report.origin.z,
        radius_chunks,
        report.hits.len()
    );
}
