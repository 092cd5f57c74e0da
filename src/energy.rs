//! # Energy Curve Generation
//!
//! Maps a position in the setlist to a target normalized energy level and to
//! the "building" flag the harmonic scorer uses to gate energy-boost jumps.
//!
//! The primary [`EnergyCurve::Wave`] follows the classic club arc: warmup,
//! first build, peak, reset, second build, outro. For a 30-track set:
//!
//! ```text
//! tracks  0-5   warmup  0.30 -> 0.60
//! tracks  6-12  build 1 0.60 -> 0.90   (building)
//! tracks 13-16  peak    0.90 -> 1.00
//! tracks 17-19  reset   1.00 -> 0.60
//! tracks 20-26  build 2 0.60 -> 0.95   (building)
//! tracks 27-29  outro   0.95 -> 0.50
//! ```
//!
//! [`EnergyCurve::SinglePeak`] is a simpler alternate: one quadratic rise to a
//! single peak around 73% of the set, then a linear cooldown. It has no reset,
//! so sets driven by it lean less on the boost reward.

use serde::{Deserialize, Serialize};

/// Selectable target-energy curve shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyCurve {
    /// Build–peak–reset–build–outro wave. The default.
    #[default]
    Wave,
    /// One quadratic ramp to a single peak, then a linear cooldown.
    SinglePeak,
}

impl EnergyCurve {
    /// Target normalized energy (0.0–1.0) for position `index` of `total`.
    ///
    /// `total = 0` is treated as a single-position sequence so the curve
    /// still returns its starting value instead of dividing by zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn target_energy(self, index: usize, total: usize) -> f64 {
        let progress = if total == 0 {
            0.0
        } else {
            index as f64 / total as f64
        };

        match self {
            Self::Wave => wave_energy(progress),
            Self::SinglePeak => single_peak_energy(progress),
        }
    }

    /// Whether `index` lies in a phase of intentionally rising energy.
    ///
    /// Only building positions qualify for the harmonic energy-boost reward.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_building_phase(self, index: usize, total: usize) -> bool {
        let progress = if total == 0 {
            0.0
        } else {
            index as f64 / total as f64
        };

        match self {
            Self::Wave => (0.2..0.45).contains(&progress) || (0.65..0.9).contains(&progress),
            Self::SinglePeak => progress < SINGLE_PEAK_POSITION,
        }
    }
}

/// Progress fraction where the single-peak curve tops out.
const SINGLE_PEAK_POSITION: f64 = 0.73;

fn wave_energy(progress: f64) -> f64 {
    if progress < 0.2 {
        // Warmup
        0.3 + (progress / 0.2) * 0.3
    } else if progress < 0.45 {
        // Build 1
        0.6 + ((progress - 0.2) / 0.25) * 0.3
    } else if progress < 0.55 {
        // Peak
        0.9 + ((progress - 0.45) / 0.1) * 0.1
    } else if progress < 0.65 {
        // Reset: drop the floor so build 2 has somewhere to go
        1.0 - ((progress - 0.55) / 0.1) * 0.4
    } else if progress < 0.9 {
        // Build 2
        0.6 + ((progress - 0.65) / 0.25) * 0.35
    } else {
        // Outro
        0.95 - ((progress - 0.9) / 0.1) * 0.45
    }
}

fn single_peak_energy(progress: f64) -> f64 {
    if progress < SINGLE_PEAK_POSITION {
        let ramp = progress / SINGLE_PEAK_POSITION;
        0.4 + ramp * ramp * 0.55
    } else {
        0.95 - ((progress - SINGLE_PEAK_POSITION) / (1.0 - SINGLE_PEAK_POSITION)) * 0.35
    }
}
