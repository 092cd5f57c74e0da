//! # Track Data Model
//!
//! Defines the track and mood input types shared by every part of Setwave.
//! A [`Track`] is an immutable value snapshot for the duration of one setlist
//! generation: scoring never writes back onto it, rankings live in auxiliary
//! structures.
//!
//! ## Sentinel Values
//!
//! Audio features are populated by an external analysis step. Fields with no
//! available measurement use documented sentinels instead of `Option`s so the
//! scoring math stays branch-free:
//!
//! - `bpm = 0.0`: tempo unknown
//! - `camelot = "Unknown"`: no harmonic information
//! - `vibe_score = 0.0`: not yet enriched
//!
//! Serde deserialization applies these defaults automatically, so a library
//! file may omit any feature field.

use serde::{Deserialize, Serialize};

/// A single track with its audio feature vector.
///
/// `id` is stable and unique within a run; the setlist output and the
/// candidate pool are both deduplicated on it. `key` and `mode` carry the raw
/// source encoding (platform APIs and local analysis disagree on it) and are
/// never read by the scoring math; only `camelot` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    /// Playable resource reference (e.g. a streaming URI), passed through
    /// untouched to the playlist-export boundary.
    #[serde(default)]
    pub uri: String,
    /// Tempo in beats per minute. `0.0` means unknown.
    #[serde(default)]
    pub bpm: f64,
    /// Normalized loudness/intensity proxy, 0.0–1.0.
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub valence: f64,
    #[serde(default)]
    pub danceability: f64,
    /// Raw pitch class (0–11), source encoding. Not consumed by scoring.
    #[serde(default)]
    pub key: u8,
    /// 1 = major, 0 = minor. Not consumed by scoring.
    #[serde(default = "default_mode")]
    pub mode: u8,
    /// Camelot wheel code, e.g. `"8A"`, `"5B"`, or the sentinel `"Unknown"`.
    #[serde(default = "default_camelot")]
    pub camelot: String,
    /// Externally computed desirability heuristic, 0–100.
    #[serde(default)]
    pub vibe_score: f64,
}

fn default_camelot() -> String {
    "Unknown".to_string()
}

const fn default_mode() -> u8 {
    1
}

/// Qualitative starting-vibe hint.
///
/// Accepted on [`MoodInput`] but not consumed by the scoring math in either
/// sequencing policy. Kept so the interface stays stable; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartVibe {
    Low,
    Medium,
    High,
}

/// The user's request: a target tempo and an optional vibe hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodInput {
    /// Target tempo in BPM. Must be positive.
    pub target_bpm: f64,
    /// Inert hint, see [`StartVibe`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_vibe: Option<StartVibe>,
}

impl MoodInput {
    /// Mood input with just a target tempo.
    #[must_use]
    pub const fn with_target_bpm(target_bpm: f64) -> Self {
        Self {
            target_bpm,
            start_vibe: None,
        }
    }
}
