//! # Track Library Loading & Feature Enrichment
//!
//! The track collection arrives as a JSON library file: an array of track
//! objects with whatever feature fields the upstream analysis managed to
//! produce. Missing fields deserialize to the documented sentinels
//! (see [`crate::track`]), so a half-analyzed library still loads.
//!
//! Enrichment fills in the vibe score for tracks that lack one, from energy
//! and danceability plus bounded jitter. It is idempotent: a track that
//! already carries a vibe score passes through untouched, so re-running
//! enrichment over a cached library never drifts.

use crate::track::Track;
use anyhow::{Context, Result};
use log::{debug, info};
use path_absolutize::Absolutize;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Jitter half-width applied when computing a fresh vibe score.
const VIBE_JITTER: f64 = 10.0;

/// Load a track library from a JSON file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not parse as a JSON
/// array of tracks. An empty array is valid and yields an empty collection.
pub fn load_library(path: &Path) -> Result<Vec<Track>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read track library at {}", path.display()))?;

    let tracks: Vec<Track> = serde_json::from_str(&contents)
        .with_context(|| format!("Track library {} is not a valid JSON track array", path.display()))?;

    info!("Loaded {} tracks from {}", tracks.len(), path.display());
    Ok(tracks)
}

/// Resolve a user-supplied library path to an absolute path.
///
/// Relative paths are resolved against the current working directory, the
/// same way other inputs on the command line behave.
///
/// # Errors
///
/// Returns an error when the current directory cannot be determined.
pub fn resolve_library_path(path: &Path) -> Result<PathBuf> {
    let absolute = path
        .absolutize()
        .with_context(|| format!("Failed to resolve library path {}", path.display()))?;
    Ok(absolute.into_owned())
}

/// Compute a vibe score for one track if it does not already have one.
///
/// High energy plus high danceability means high vibe:
/// `energy * 50 + danceability * 50`, nudged by jitter in
/// `[-VIBE_JITTER, +VIBE_JITTER)` and clamped to `[0, 100]`. The jitter keeps
/// libraries full of near-identical tracks from producing the same set every
/// run; it is bounded so it can never flip a clear ranking.
#[must_use]
pub fn enrich<R: Rng + ?Sized>(track: Track, rng: &mut R) -> Track {
    if track.vibe_score > 0.0 {
        // Already enriched upstream; consume as-is.
        return track;
    }

    let base = track.energy * 50.0 + track.danceability * 50.0;
    let jitter = rng.gen_range(-VIBE_JITTER..VIBE_JITTER);
    let vibe_score = (base + jitter).clamp(0.0, 100.0);

    debug!("Enriched '{}' with vibe score {vibe_score:.1}", track.name);
    Track { vibe_score, ..track }
}

/// Enrich a whole collection, preserving order.
#[must_use]
pub fn enrich_all<R: Rng + ?Sized>(tracks: Vec<Track>, rng: &mut R) -> Vec<Track> {
    tracks.into_iter().map(|track| enrich(track, rng)).collect()
}
