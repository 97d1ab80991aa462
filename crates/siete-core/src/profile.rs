//! Gaussian band-shaping profiles.
//!
//! A rectangular frequency mask rings audibly at its edges. These helpers
//! build the smooth alternative: a Gaussian weight that peaks at a band's
//! center and decays toward its neighbors, blended with the requested gain
//! so that far-away frequencies are left untouched.

use libm::expf;

/// Gaussian weight of a frequency relative to a band center.
///
/// Returns `exp(-0.5 * ((freq - center) / sigma)^2)`: 1.0 at the center,
/// decaying smoothly with distance.
#[inline]
pub fn gaussian(freq_hz: f32, center_hz: f32, sigma_hz: f32) -> f32 {
    let z = (freq_hz - center_hz) / sigma_hz;
    expf(-0.5 * z * z)
}

/// Blend a linear gain toward unity by a profile weight.
///
/// `1 + (gain - 1) * weight`: at weight 1.0 the full gain applies, at
/// weight 0.0 the result is exactly 1.0 (no effect). Band profiles built
/// this way compose multiplicatively, so overlapping Gaussian tails
/// combine instead of masking each other.
#[inline]
pub fn blend_gain(gain_linear: f32, weight: f32) -> f32 {
    1.0 + (gain_linear - 1.0) * weight
}
