//! Candidate pool selection.
//!
//! Reduces the full track collection to a bounded pool before sequencing.
//! Ranking favors tempo fit (heavily) and the precomputed vibe score, with a
//! small uniform jitter so repeated runs over near-identical tracks are not
//! forced into the same order. The jitter source is injected so tests can pin
//! it with a seed.

use crate::tempo::effective_bpm_distance;
use crate::track::Track;
use rand::Rng;
use std::collections::HashSet;

/// Hard cap on the candidate pool size.
pub const MAX_POOL_SIZE: usize = 50;

/// Upper bound (exclusive) of the uniform jitter added to each pool score.
pub const JITTER_MAGNITUDE: f64 = 10.0;

/// Select up to [`MAX_POOL_SIZE`] candidates, ranked by desirability.
///
/// Per-track score: `vibe_score * 2 - effective_bpm_distance * 10 + jitter`,
/// jitter uniform on `[0, JITTER_MAGNITUDE)`. The tempo weight dwarfs the vibe
/// weight: a track 10 effective BPM off the target loses as much as 50 vibe
/// points buy.
///
/// Duplicate ids keep their first occurrence. An empty input yields an empty
/// pool; the sequencer treats that as "no setlist", not an error.
#[must_use]
pub fn select_pool<R: Rng + ?Sized>(
    all_tracks: &[Track],
    target_bpm: f64,
    rng: &mut R,
) -> Vec<Track> {
    let mut seen_ids = HashSet::new();
    let mut candidates: Vec<(f64, &Track)> = all_tracks
        .iter()
        .filter(|track| seen_ids.insert(track.id.clone()))
        .map(|track| {
            let bpm_dist = effective_bpm_distance(track.bpm, target_bpm);
            let score = track.vibe_score * 2.0 - bpm_dist * 10.0
                + rng.gen_range(0.0..JITTER_MAGNITUDE);
            (score, track)
        })
        .collect();

    candidates.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(MAX_POOL_SIZE)
        .map(|(_, track)| track.clone())
        .collect()
}
