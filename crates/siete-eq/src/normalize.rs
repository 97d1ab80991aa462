//! Peak normalization.

use crate::buffer::AudioBuffer;

/// Scale the buffer to unit peak if it exceeds 1.0.
///
/// The peak is taken across the entire buffer — all batch entries and both
/// channels — so relative levels between channels are preserved. Buffers
/// already within `[-1, 1]` pass through untouched. This is the final step
/// of every strategy and is what keeps band boosts from clipping.
pub fn normalize_peak(buffer: &mut AudioBuffer) {
    let peak = buffer.peak();
    if peak > 1.0 {
        let inv = 1.0 / peak;
        for sample in buffer.data_mut() {
            *sample *= inv;
        }
    }
}
