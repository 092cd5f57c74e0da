//! Effective tempo distance with half-time/double-time equivalence.
//!
//! DJs treat a 70 BPM track as mixable over a 140 BPM target (half-time) and
//! a 280 BPM track likewise (double-time). The distance here is the smallest
//! of the three readings, so such tracks rank as if they sat exactly on the
//! target.

/// Sentinel distance for tracks with missing tempo data. Large enough to rank
/// them behind every real measurement without special-casing downstream.
pub const UNKNOWN_TEMPO_PENALTY: f64 = 100.0;

/// Distance between a track's tempo and a target tempo, in effective BPM.
///
/// Returns [`UNKNOWN_TEMPO_PENALTY`] when either tempo is zero or negative
/// (unknown tempo must deprioritize the track, never crash the run).
///
/// Only the track tempo is doubled/halved; the target is the DJ's chosen
/// anchor and stays fixed. `effective_bpm_distance(70.0, 140.0)` is 0 but
/// `effective_bpm_distance(140.0, 70.0)` is also 0 via the half-time reading;
/// asymmetric cases like (35, 140) are not folded twice.
#[must_use]
pub fn effective_bpm_distance(track_bpm: f64, target_bpm: f64) -> f64 {
    if track_bpm <= 0.0 || target_bpm <= 0.0 {
        return UNKNOWN_TEMPO_PENALTY;
    }

    let straight = (track_bpm - target_bpm).abs();
    let half_time = (track_bpm * 2.0 - target_bpm).abs();
    let double_time = (track_bpm * 0.5 - target_bpm).abs();

    straight.min(half_time).min(double_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_zero() {
        assert_eq!(effective_bpm_distance(140.0, 140.0), 0.0);
    }

    #[test]
    fn test_half_time_counts_as_match() {
        // 70 BPM track over a 140 BPM target: half-time, distance 0.
        assert_eq!(effective_bpm_distance(70.0, 140.0), 0.0);
    }

    #[test]
    fn test_double_time_counts_as_match() {
        // 280 BPM track over a 140 BPM target: double-time, distance 0.
        assert_eq!(effective_bpm_distance(280.0, 140.0), 0.0);
    }

    #[test]
    fn test_plain_distance_when_no_multiple_helps() {
        // 100 vs 140: straight 40, doubled 60, halved 90 -> 40.
        assert_eq!(effective_bpm_distance(100.0, 140.0), 40.0);
    }

    #[test]
    fn test_missing_tempo_gets_sentinel_penalty() {
        assert_eq!(effective_bpm_distance(0.0, 140.0), UNKNOWN_TEMPO_PENALTY);
        assert_eq!(effective_bpm_distance(128.0, 0.0), UNKNOWN_TEMPO_PENALTY);
        assert_eq!(effective_bpm_distance(-1.0, 140.0), UNKNOWN_TEMPO_PENALTY);
    }

    #[test]
    fn test_distance_is_never_negative() {
        for (track, target) in [(63.0, 128.0), (175.0, 128.0), (86.5, 172.0)] {
            assert!(
                effective_bpm_distance(track, target) >= 0.0,
                "distance for ({track}, {target}) must be non-negative"
            );
        }
    }

    #[test]
    fn test_idempotent_pure_function() {
        let a = effective_bpm_distance(123.4, 128.0);
        let b = effective_bpm_distance(123.4, 128.0);
        assert_eq!(a, b, "repeated calls must return identical results");
    }
}
