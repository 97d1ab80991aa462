//! Soft-knee gain computer for dynamic-range compression.
//!
//! Computes how many dB of gain reduction to apply for a given input level.
//! The transition into the full compression ratio is smoothed over a knee
//! width rather than switching abruptly at the threshold:
//!
//! ```text
//!               over = level - threshold
//!
//! over <= -knee/2            no reduction
//! -knee/2 < over <= knee/2   (1/ratio - 1) * (over + knee/2)^2 / (2*knee)
//! over > knee/2              (1/ratio - 1) * over
//! ```
//!
//! The quadratic segment meets both neighbors continuously, so the gain
//! curve has no corner at the threshold.

/// Soft-knee compression curve operating on decibel levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftKnee {
    /// Level in dB where compression begins.
    pub threshold_db: f32,
    /// Compression ratio (4.0 means 4:1).
    pub ratio: f32,
    /// Width of the soft-knee region in dB, centered on the threshold.
    pub knee_db: f32,
}

impl SoftKnee {
    /// Create a gain computer with the given threshold, ratio, and knee width.
    pub const fn new(threshold_db: f32, ratio: f32, knee_db: f32) -> Self {
        Self {
            threshold_db,
            ratio,
            knee_db,
        }
    }

    /// Gain delta in dB for a signal at `level_db`.
    ///
    /// Always <= 0 for ratios above 1: the result is the amount of
    /// reduction to apply, in dB.
    #[inline]
    pub fn gain_db(&self, level_db: f32) -> f32 {
        let over = level_db - self.threshold_db;
        let half_knee = self.knee_db / 2.0;
        let slope = 1.0 / self.ratio - 1.0;

        if over <= -half_knee {
            0.0
        } else if over <= half_knee {
            slope * (over + half_knee) * (over + half_knee) / (2.0 * self.knee_db)
        } else {
            slope * over
        }
    }
}
