//! DJ setlist generation following tempo, energy waves & harmonic mixing.
//!
//! Core modules:
//! - [`tempo`] - Effective tempo distance (half-time/double-time aware)
//! - [`camelot`] - Harmonic compatibility on the Camelot wheel
//! - [`energy`] - Target energy curves and build-phase detection
//! - [`pool`] - Bounded candidate pool selection
//! - [`sequencer`] - Greedy sequencing walk and its two policies
//!
//! ### Supporting Modules
//!
//! - [`track`] - Track and mood input data model
//! - [`library`] - Track library loading and feature enrichment
//! - [`export`] - CSV / text / URI boundary serializers
//! - [`config`] - Configuration and data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use setwave::sequencer::{SetlistGenerator, SequencerConfig};
//! use setwave::track::{MoodInput, Track};
//!
//! let tracks: Vec<Track> = (0..40)
//!     .map(|i| Track {
//!         id: format!("track-{i}"),
//!         name: format!("Track {i}"),
//!         artist: "Some Artist".to_string(),
//!         uri: format!("spotify:track:{i}"),
//!         bpm: 124.0 + f64::from(i % 5),
//!         energy: 0.3 + 0.015 * f64::from(i),
//!         valence: 0.5,
//!         danceability: 0.6,
//!         key: 0,
//!         mode: 1,
//!         camelot: "8A".to_string(),
//!         vibe_score: 55.0,
//!     })
//!     .collect();
//!
//! let mood = MoodInput::with_target_bpm(126.0);
//! let generator = SetlistGenerator::new(SequencerConfig::default());
//!
//! // Seeded for reproducibility; use `generate` for a fresh draw per run.
//! let setlist = generator.generate_seeded(&tracks, &mood, 42);
//! assert!(setlist.len() <= 30);
//! println!("Generated setlist with {} tracks", setlist.len());
//! ```
//!
//! ## Algorithm Details
//!
//! Generation runs in two stages:
//!
//! ### Candidate Pool
//! - Scores every track as `vibe_score * 2 - effective_bpm_distance * 10`
//!   plus bounded jitter
//! - Tracks at half or double the target tempo count as on-tempo
//! - Keeps the 50 best, unique by id
//!
//! ### Greedy Sequencing
//! - Opens on the track closest to the warmup energy and target tempo
//! - Each further position picks the unused candidate minimizing a weighted
//!   sum of energy fit, tempo flow from the previous track, harmonic
//!   transition score, and vibe
//! - Energy-boost key jumps (+2/+7 clockwise, same letter) are rewarded only
//!   during build phases of the energy wave
//! - Stops at 30 tracks, or earlier when candidates run out
//!
//! An alternate strict policy replaces the soft scoring with hard tempo-jump
//! and compatibility constraints plus a smallest-jump fallback; see
//! [`sequencer::StrictPolicy`].
//!
//! ## Error Handling
//!
//! The scoring core never fails: missing tempos rank last via a sentinel
//! penalty, unknown keys score a neutral penalty, an empty library produces
//! an empty setlist. I/O boundaries (library loading, CLI) return
//! `Result<T, anyhow::Error>` with context.
//!
//! ## Testing
//!
//! Unit tests sit next to each module; end-to-end scenarios live in
//! `tests/integration_tests.rs`; criterion benchmarks in `benches/`.
//!
//! Run tests with:
//! ```bash
//! cargo test
//! cargo bench
//! ```

pub mod camelot;
pub mod cli;
pub mod completion;
pub mod config;
pub mod energy;
pub mod export;
pub mod library;
pub mod pool;
pub mod sequencer;
pub mod tempo;
pub mod track;
