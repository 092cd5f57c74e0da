//! # Setwave - DJ Setlist Generator
//!
//! Setwave orders a pool of analyzed music tracks into a DJ-style setlist that
//! follows a target tempo and an energy wave, while keeping consecutive tracks
//! harmonically compatible on the Camelot wheel.
//!
//! ## Architecture
//!
//! - `cli`: Command-line interface definitions
//! - `library`: Track library loading and feature enrichment
//! - `tempo` / `camelot` / `energy`: The scoring primitives
//! - `pool`: Bounded candidate pool selection
//! - `sequencer`: The greedy sequencing walk and its two policies
//! - `export`: CSV / text / URI boundary serializers
//! - `config`: Data directory and default library location
//!
//! ## Usage
//!
//! ```bash
//! # Generate a 128 BPM setlist from the default library
//! setwave generate 128
//!
//! # Reproducible run from an explicit library, exported as CSV
//! setwave generate 140 --library ./library.json --seed 7 --format csv
//!
//! # Inspect the energy wave
//! setwave curve 30
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use std::path::PathBuf;

use setwave::sequencer::{SequencerConfig, SetlistGenerator};
use setwave::track::{MoodInput, Track};
use setwave::{cli, completion, config, energy, export, library};

/// Resolve the library path: explicit argument first, platform default
/// otherwise.
fn resolve_library(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(path) => library::resolve_library_path(&path),
        None => config::get_default_library_path(),
    }
}

/// Main entry point for the Setwave application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the appropriate module functions. All operations return Results for
/// consistent error handling throughout the application.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug setwave generate 128` - Enable debug logging
/// - `RUST_LOG=setwave::sequencer=debug setwave generate 128` - Module-specific
fn main() -> Result<()> {
    // Initialize environment logger for debugging and monitoring
    env_logger::init();

    // Parse command-line arguments using Clap derive macros
    let args = cli::Args::parse();

    // Route commands to appropriate module functions
    match args.command {
        cli::Command::Generate {
            target_bpm,
            library,
            start_vibe,
            policy,
            curve,
            seed,
            format,
            verbose,
        } => {
            if target_bpm <= 0.0 {
                return Err(anyhow::anyhow!(
                    "Target BPM must be positive, got {target_bpm}"
                ));
            }

            let library_path = resolve_library(library)?;
            info!("Generating setlist from: {}", library_path.display());
            let tracks = library::load_library(&library_path)?;

            let mood = MoodInput {
                target_bpm,
                start_vibe: start_vibe.map(Into::into),
            };
            let generator = SetlistGenerator::new(SequencerConfig {
                policy: policy.into(),
                curve: curve.into(),
                ..SequencerConfig::default()
            });

            // One RNG drives enrichment and sequencing so a single seed pins
            // the whole run.
            let setlist = match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let enriched = library::enrich_all(tracks, &mut rng);
                    generator.generate_with_rng(&enriched, &mood, &mut rng)
                }
                None => {
                    let mut rng = thread_rng();
                    let enriched = library::enrich_all(tracks, &mut rng);
                    generator.generate_with_rng(&enriched, &mood, &mut rng)
                }
            };

            if setlist.is_empty() {
                eprintln!("No setlist could be built (empty or unusable library).");
                return Ok(());
            }

            print_setlist(&setlist, format, verbose);
        }
        cli::Command::List { library } => {
            let library_path = resolve_library(library)?;
            let tracks = library::load_library(&library_path)?;
            print_library(&tracks);
        }
        cli::Command::Curve { length, curve } => {
            print_curve(curve.into(), length);
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
    }

    Ok(())
}

fn print_setlist(setlist: &[Track], format: cli::FormatArg, verbose: bool) {
    match format {
        cli::FormatArg::Text => {
            if verbose {
                for (index, track) in setlist.iter().enumerate() {
                    println!(
                        "{:2}. {} - {} [{} BPM] [{}] energy {:.2}, vibe {:.0}",
                        index + 1,
                        track.name,
                        track.artist,
                        track.bpm,
                        track.camelot,
                        track.energy,
                        track.vibe_score,
                    );
                }
            } else {
                println!("{}", export::to_text(setlist));
            }
        }
        cli::FormatArg::Csv => print!("{}", export::to_csv(setlist)),
        cli::FormatArg::Uri => {
            for uri in export::track_uris(setlist) {
                println!("{uri}");
            }
        }
    }
}

fn print_library(tracks: &[Track]) {
    println!("{} tracks", tracks.len());
    for track in tracks {
        println!(
            "{} - {} [{} BPM] [{}] energy {:.2}, dance {:.2}, vibe {:.0}",
            track.artist,
            track.name,
            track.bpm,
            track.camelot,
            track.energy,
            track.danceability,
            track.vibe_score,
        );
    }
}

fn print_curve(curve: energy::EnergyCurve, length: usize) {
    for index in 0..length {
        let target = curve.target_energy(index, length);
        let marker = if curve.is_building_phase(index, length) {
            "  (building)"
        } else {
            ""
        };
        println!("{index:2}  {target:.2}{marker}");
    }
}
