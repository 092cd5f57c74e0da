//! # Setlist Sequencing Module
//!
//! The greedy algorithm that walks positions `0..target_length` and picks the
//! best unused candidate at each step, consulting the tempo matcher, harmonic
//! scorer, and energy curve.
//!
//! Two sequencing policies exist behind the [`SequencingPolicy`] trait,
//! selected at configuration time. They are alternatives, never combined:
//!
//! - [`WeightedPolicy`] (primary): every mismatch is a soft penalty folded
//!   into one weighted total; nothing is ever filtered outright.
//! - [`StrictPolicy`] (alternate, the earlier design): hard tempo-jump and
//!   harmonic constraints with a smallest-jump fallback when nothing
//!   survives.
//!
//! The walk is pure greedy with no backtracking: a locally optimal pick at
//! step `i` is never revisited even if it forecloses a better global
//! sequence. Accepted tradeoff: O(N*M) for N positions over an M-track pool,
//! well under a second at the documented size bounds.

use crate::camelot::{harmonic_score, is_compatible};
use crate::energy::EnergyCurve;
use crate::pool::select_pool;
use crate::tempo::effective_bpm_distance;
use crate::track::{MoodInput, Track};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::collections::HashSet;

/// Maximum number of tracks in a generated setlist.
pub const MAX_SETLIST_LENGTH: usize = 30;

/// Effective BPM flow jump beyond which the weighted policy applies
/// [`FLOW_JUMP_PENALTY`] instead of the raw distance.
pub const MAX_FLOW_JUMP: f64 = 10.0;

/// Soft penalty replacing any flow jump larger than [`MAX_FLOW_JUMP`]. Big
/// enough to lose against every in-range candidate, still finite so the walk
/// continues when only out-of-range candidates remain.
const FLOW_JUMP_PENALTY: f64 = 1000.0;

/// Hard flow-jump ceiling of the strict policy.
pub const MAX_STRICT_JUMP: f64 = 5.0;

/// Fallback tie-break bonus for harmonically compatible candidates when the
/// strict policy finds no survivor.
const COMPAT_FALLBACK_BONUS: f64 = 5.0;

/// Per-term weights of the weighted policy's step score.
#[derive(Debug, Clone, Copy)]
pub struct StepWeights {
    pub energy: f64,
    pub tempo_flow: f64,
    pub harmonic: f64,
    pub vibe: f64,
}

impl Default for StepWeights {
    fn default() -> Self {
        Self {
            energy: 15.0,
            tempo_flow: 20.0,
            harmonic: 10.0,
            vibe: 5.0,
        }
    }
}

/// A sequencing policy picks the next track among the unused candidates.
///
/// `candidates` holds the still-unused pool members; the returned value is an
/// index into that slice. `None` means no candidate is acceptable and the
/// setlist ends early (a normal termination, not an error).
pub trait SequencingPolicy {
    fn pick_next(
        &self,
        candidates: &[&Track],
        prev: &Track,
        position: usize,
        target_length: usize,
    ) -> Option<usize>;
}

/// Soft multi-factor scoring: energy fit, tempo flow, harmonic transition,
/// and vibe, each weighted and summed. Lower total wins.
#[derive(Debug, Clone, Default)]
pub struct WeightedPolicy {
    curve: EnergyCurve,
    weights: StepWeights,
}

impl WeightedPolicy {
    #[must_use]
    pub fn new(curve: EnergyCurve) -> Self {
        Self {
            curve,
            weights: StepWeights::default(),
        }
    }

    #[must_use]
    pub fn with_weights(curve: EnergyCurve, weights: StepWeights) -> Self {
        Self { curve, weights }
    }
}

impl SequencingPolicy for WeightedPolicy {
    fn pick_next(
        &self,
        candidates: &[&Track],
        prev: &Track,
        position: usize,
        target_length: usize,
    ) -> Option<usize> {
        let target_energy = self.curve.target_energy(position, target_length);
        let is_building = self.curve.is_building_phase(position, target_length);

        let mut best: Option<(usize, f64)> = None;
        for (index, track) in candidates.iter().enumerate() {
            let energy_diff = (track.energy - target_energy).abs();

            // Flow is judged against the previous track, not the global
            // target: the set may drift as long as each transition is tight.
            let flow_dist = effective_bpm_distance(track.bpm, prev.bpm);
            let bpm_penalty = if flow_dist > MAX_FLOW_JUMP {
                FLOW_JUMP_PENALTY
            } else {
                flow_dist
            };

            let harmonic = harmonic_score(&prev.camelot, &track.camelot, is_building);
            let vibe_penalty = (100.0 - track.vibe_score) / 100.0;

            let total = energy_diff * self.weights.energy
                + bpm_penalty * self.weights.tempo_flow
                + harmonic * self.weights.harmonic
                + vibe_penalty * self.weights.vibe;

            if best.map_or(true, |(_, score)| total < score) {
                best = Some((index, total));
            }
        }

        best.map(|(index, _)| index)
    }
}

/// Hard-constraint policy: a candidate must keep the effective tempo jump
/// within [`MAX_STRICT_JUMP`] *and* be strictly Camelot-compatible with the
/// previous track. Survivors are ranked by energy fit, then flow. When no
/// candidate survives, falls back to the smallest raw jump with a
/// [`COMPAT_FALLBACK_BONUS`] for compatible keys.
#[derive(Debug, Clone, Default)]
pub struct StrictPolicy {
    curve: EnergyCurve,
}

impl StrictPolicy {
    #[must_use]
    pub fn new(curve: EnergyCurve) -> Self {
        Self { curve }
    }
}

impl SequencingPolicy for StrictPolicy {
    fn pick_next(
        &self,
        candidates: &[&Track],
        prev: &Track,
        position: usize,
        target_length: usize,
    ) -> Option<usize> {
        let target_energy = self.curve.target_energy(position, target_length);

        let mut best_survivor: Option<(usize, f64)> = None;
        let mut best_fallback: Option<(usize, f64)> = None;

        for (index, track) in candidates.iter().enumerate() {
            let jump = effective_bpm_distance(track.bpm, prev.bpm);
            let compatible = is_compatible(&prev.camelot, &track.camelot);

            if jump <= MAX_STRICT_JUMP && compatible {
                let fit = (track.energy - target_energy).abs() * 10.0 + jump;
                if best_survivor.map_or(true, |(_, score)| fit < score) {
                    best_survivor = Some((index, fit));
                }
            }

            let fallback_score = if compatible {
                jump - COMPAT_FALLBACK_BONUS
            } else {
                jump
            };
            if best_fallback.map_or(true, |(_, score)| fallback_score < score) {
                best_fallback = Some((index, fallback_score));
            }
        }

        if best_survivor.is_none() && !candidates.is_empty() {
            debug!("No candidate survived strict constraints at position {position}; falling back to smallest tempo jump");
        }

        best_survivor.or(best_fallback).map(|(index, _)| index)
    }
}

/// Which policy a [`SetlistGenerator`] runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicyKind {
    #[default]
    Weighted,
    Strict,
}

/// Configuration for setlist generation.
#[derive(Debug, Clone)]
pub struct SequencerConfig {
    pub max_length: usize,
    pub curve: EnergyCurve,
    pub policy: PolicyKind,
    pub weights: StepWeights,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            max_length: MAX_SETLIST_LENGTH,
            curve: EnergyCurve::Wave,
            policy: PolicyKind::Weighted,
            weights: StepWeights::default(),
        }
    }
}

/// High-level setlist generator with convenient entry points.
#[derive(Debug, Clone, Default)]
pub struct SetlistGenerator {
    config: SequencerConfig,
}

impl SetlistGenerator {
    #[must_use]
    pub fn new(config: SequencerConfig) -> Self {
        Self { config }
    }

    /// Generate a setlist with ambient randomness (fresh jitter per run).
    #[must_use]
    pub fn generate(&self, all_tracks: &[Track], mood: &MoodInput) -> Vec<Track> {
        self.generate_with_rng(all_tracks, mood, &mut thread_rng())
    }

    /// Generate a setlist with a fixed seed. Same seed + same input gives an
    /// identical setlist; used by tests and for reproducible runs.
    #[must_use]
    pub fn generate_seeded(&self, all_tracks: &[Track], mood: &MoodInput, seed: u64) -> Vec<Track> {
        self.generate_with_rng(all_tracks, mood, &mut StdRng::seed_from_u64(seed))
    }

    /// Generate a setlist drawing jitter from the supplied source.
    #[must_use]
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        all_tracks: &[Track],
        mood: &MoodInput,
        rng: &mut R,
    ) -> Vec<Track> {
        match self.config.policy {
            PolicyKind::Weighted => {
                let policy = WeightedPolicy::with_weights(self.config.curve, self.config.weights);
                generate_setlist_with(
                    all_tracks,
                    mood,
                    &policy,
                    self.config.curve,
                    self.config.max_length,
                    rng,
                )
            }
            PolicyKind::Strict => {
                let policy = StrictPolicy::new(self.config.curve);
                generate_setlist_with(
                    all_tracks,
                    mood,
                    &policy,
                    self.config.curve,
                    self.config.max_length,
                    rng,
                )
            }
        }
    }
}

/// Generate a setlist with the default configuration (weighted policy, wave
/// curve, ambient randomness).
#[must_use]
pub fn generate_setlist(all_tracks: &[Track], mood: &MoodInput) -> Vec<Track> {
    SetlistGenerator::default().generate(all_tracks, mood)
}

/// Core generation walk: pool selection, opening pick, then greedy steps
/// under the given policy.
///
/// `curve` must match the curve the policy scores against; the opening pick
/// (identical across policies) reads it directly.
#[must_use]
pub fn generate_setlist_with<P: SequencingPolicy + ?Sized, R: Rng + ?Sized>(
    all_tracks: &[Track],
    mood: &MoodInput,
    policy: &P,
    curve: EnergyCurve,
    max_length: usize,
    rng: &mut R,
) -> Vec<Track> {
    if mood.target_bpm <= 0.0 {
        warn!("Non-positive target BPM {}; returning empty setlist", mood.target_bpm);
        return Vec::new();
    }
    if let Some(vibe) = mood.start_vibe {
        // Accepted but not scored; see DESIGN.md.
        debug!("start_vibe hint {vibe:?} received (not consumed by scoring)");
    }

    log_input_stats(all_tracks, mood.target_bpm);

    let pool = select_pool(all_tracks, mood.target_bpm, rng);
    let target_length = pool.len().min(max_length);
    log_pool_stats(&pool, all_tracks, mood.target_bpm);

    if target_length == 0 {
        return Vec::new();
    }

    let mut setlist: Vec<Track> = Vec::with_capacity(target_length);
    let mut used_ids: HashSet<String> = HashSet::with_capacity(target_length);

    // Opening pick: closest to the warmup energy and the global target tempo.
    // Identical for both policies, so it lives in the shared walk.
    let opening = pool.iter().min_by(|a, b| {
        let score_a = opening_score(a, mood.target_bpm, curve, target_length);
        let score_b = opening_score(b, mood.target_bpm, curve, target_length);
        score_a.partial_cmp(&score_b).unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(first) = opening {
        used_ids.insert(first.id.clone());
        setlist.push(first.clone());
    }

    for position in 1..target_length {
        let prev = match setlist.last() {
            Some(track) => track.clone(),
            None => break,
        };

        let candidates: Vec<&Track> = pool
            .iter()
            .filter(|track| !used_ids.contains(&track.id))
            .collect();
        if candidates.is_empty() {
            // Exhausted mid-sequence: return the partial setlist built so far.
            break;
        }

        match policy.pick_next(&candidates, &prev, position, target_length) {
            Some(index) => {
                let chosen = candidates[index];
                used_ids.insert(chosen.id.clone());
                setlist.push(chosen.clone());
            }
            None => break,
        }
    }

    debug!("Generated setlist with {} of {target_length} requested tracks", setlist.len());
    setlist
}

fn opening_score(track: &Track, target_bpm: f64, curve: EnergyCurve, target_length: usize) -> f64 {
    let bpm_dist = effective_bpm_distance(track.bpm, target_bpm);
    let energy_diff = (track.energy - curve.target_energy(0, target_length)).abs();
    bpm_dist * 2.0 + energy_diff * 10.0
}

#[allow(clippy::cast_precision_loss)]
fn log_input_stats(all_tracks: &[Track], target_bpm: f64) {
    let known: Vec<f64> = all_tracks.iter().map(|t| t.bpm).filter(|b| *b > 0.0).collect();
    let avg = if known.is_empty() {
        0.0
    } else {
        known.iter().sum::<f64>() / known.len() as f64
    };
    debug!(
        "Input: {} tracks. Target BPM: {target_bpm}. Avg input BPM: {avg:.1}",
        all_tracks.len()
    );
}

#[allow(clippy::cast_precision_loss)]
fn log_pool_stats(pool: &[Track], all_tracks: &[Track], target_bpm: f64) {
    let known: Vec<f64> = pool.iter().map(|t| t.bpm).filter(|b| *b > 0.0).collect();
    let avg = if known.is_empty() {
        0.0
    } else {
        known.iter().sum::<f64>() / known.len() as f64
    };
    let in_range = all_tracks
        .iter()
        .filter(|t| effective_bpm_distance(t.bpm, target_bpm) <= MAX_FLOW_JUMP)
        .count();
    debug!(
        "Pool: {} tracks. Avg pool BPM: {avg:.1}. Tracks within effective ±10 BPM: {in_range}",
        pool.len()
    );
}
