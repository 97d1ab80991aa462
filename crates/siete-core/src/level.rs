//! Level conversions between decibels and linear gain.

use libm::{expf, log10f, logf};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use siete_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// The input is floored at 1e-10 so silence maps to a large negative
/// value instead of -inf.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Spectral magnitude in decibels: `20 * log10(magnitude + 1e-8)`.
///
/// The additive epsilon guards against log of zero for empty bins, which
/// matters when the result feeds a gain computer: a zeroed bin lands near
/// -160 dB, safely below any compression threshold.
#[inline]
pub fn magnitude_db(magnitude: f32) -> f32 {
    20.0 * log10f(magnitude + 1e-8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_linear_roundtrip() {
        let original = 0.5;
        let db = linear_to_db(original);
        let back = db_to_linear(db);
        assert!(
            (original - back).abs() < 1e-5,
            "Roundtrip failed: {} -> {} -> {}",
            original,
            db,
            back
        );
    }

    #[test]
    fn test_db_known_values() {
        // 0 dB = 1.0 linear
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
        // -6 dB ≈ 0.5 linear
        assert!((db_to_linear(-6.0206) - 0.5).abs() < 0.001);
        // +6 dB ≈ 2.0 linear
        assert!((db_to_linear(6.0206) - 2.0).abs() < 0.001);
        // +12 dB ≈ 3.98 linear
        assert!((db_to_linear(12.0) - 3.9811).abs() < 0.001);
    }

    #[test]
    fn test_magnitude_db_epsilon_floor() {
        // Zero magnitude must stay finite, near -160 dB
        let db = magnitude_db(0.0);
        assert!(db.is_finite());
        assert!((db - (-160.0)).abs() < 0.1, "got {}", db);
    }

    #[test]
    fn test_magnitude_db_unity() {
        assert!(magnitude_db(1.0).abs() < 0.001);
    }
}
