//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Setwave using Clap
//! derive macros. It provides a type-safe way to parse command-line arguments
//! and route them to appropriate functionality.
//!
//! ## Commands
//!
//! - `generate`: Build a setlist from a track library toward a target BPM
//! - `list`: Display all library tracks with their audio features
//! - `curve`: Print the target energy curve for a given setlist length
//! - `completion`: Generate shell completion scripts
//!
//! ## Examples
//!
//! ```bash
//! setwave generate 128 --library ./library.json
//! setwave generate 140 --policy strict --format csv
//! setwave curve 30
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::energy::EnergyCurve;
use crate::sequencer::PolicyKind;
use crate::track::StartVibe;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Sequencing policy selectable on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum PolicyArg {
    /// Soft multi-factor weighted scoring (default)
    Weighted,
    /// Hard tempo/harmonic constraints with smallest-jump fallback
    Strict,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Weighted => Self::Weighted,
            PolicyArg::Strict => Self::Strict,
        }
    }
}

/// Energy curve selectable on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum CurveArg {
    /// Build-peak-reset-build-outro wave (default)
    Wave,
    /// Single quadratic peak with linear cooldown
    SinglePeak,
}

impl From<CurveArg> for EnergyCurve {
    fn from(arg: CurveArg) -> Self {
        match arg {
            CurveArg::Wave => Self::Wave,
            CurveArg::SinglePeak => Self::SinglePeak,
        }
    }
}

/// Starting-vibe hint. Accepted for interface stability; the scoring math
/// does not consume it.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum VibeArg {
    Low,
    Medium,
    High,
}

impl From<VibeArg> for StartVibe {
    fn from(arg: VibeArg) -> Self {
        match arg {
            VibeArg::Low => Self::Low,
            VibeArg::Medium => Self::Medium,
            VibeArg::High => Self::High,
        }
    }
}

/// Output format of the `generate` command.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum FormatArg {
    /// Numbered cue-sheet lines
    Text,
    /// CSV with a header row
    Csv,
    /// One playable URI per line, in setlist order
    Uri,
}

/// Main application arguments structure.
///
/// Uses Clap derive macros to automatically generate argument parsing,
/// help text, and validation. The main structure contains only a subcommand
/// since all functionality is accessed through specific commands.
#[derive(Parser)]
#[command(name = "setwave")]
#[command(about = "Setwave: DJ setlist generation following tempo, energy waves & harmonic mixing")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
///
/// Each variant corresponds to a major piece of functionality in Setwave.
/// Command arguments are embedded directly in the enum variants for
/// type safety and automatic validation.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a setlist from the track library
    ///
    /// Selects up to 50 candidates by tempo fit and vibe, then walks the
    /// energy wave greedily, keeping consecutive tracks tempo-tight and
    /// harmonically compatible. Produces at most 30 tracks; fewer when the
    /// library is small.
    Generate {
        /// Target tempo in BPM (half- and double-time tracks also match)
        target_bpm: f64,

        /// Path to the track library JSON file
        ///
        /// Defaults to the library in the platform data directory
        /// (e.g. ~/.local/share/setwave/library.json on Linux).
        #[arg(short, long)]
        library: Option<PathBuf>,

        /// Starting vibe hint (accepted, currently not scored)
        #[arg(long)]
        start_vibe: Option<VibeArg>,

        /// Sequencing policy
        #[arg(long, value_enum, default_value = "weighted")]
        policy: PolicyArg,

        /// Target energy curve shape
        #[arg(long, value_enum, default_value = "wave")]
        curve: CurveArg,

        /// Seed for the jitter source; omit for a fresh draw per run
        ///
        /// Two runs with the same seed over the same library produce the
        /// same setlist.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Show per-track features alongside the setlist
        #[arg(short, long)]
        verbose: bool,
    },

    /// List all tracks in the library
    ///
    /// Displays every catalogued track with its audio features: BPM, Camelot
    /// key, energy, and vibe score. Tracks missing a measurement show the
    /// sentinel values the sequencer sees.
    List {
        /// Path to the track library JSON file
        #[arg(short, long)]
        library: Option<PathBuf>,
    },

    /// Print the target energy curve for a setlist length
    ///
    /// Useful for eyeballing where the build phases fall before generating:
    /// positions in a build phase are where energy-boost key jumps get
    /// rewarded.
    Curve {
        /// Setlist length to plot
        #[arg(default_value = "30")]
        length: usize,

        /// Curve shape to plot
        #[arg(long, value_enum, default_value = "wave")]
        curve: CurveArg,
    },

    /// Generate shell completions
    ///
    /// Generates completion scripts for various shells to enable tab
    /// completion of commands and options.
    ///
    /// Usage: setwave completion bash > ~/.local/share/bash-completion/completions/setwave
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
