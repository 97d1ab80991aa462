//! Siete EQ - seven-band multiband equalization strategies
//!
//! Three stateless, whole-buffer equalizer strategies sharing one
//! input/output contract and one band taxonomy:
//!
//! - [`equalize_direct`] - single full-spectrum real FFT with rectangular
//!   per-band gain masks; brilliance capped at a fixed 20 kHz
//! - [`equalize_smooth`] - STFT processing with Gaussian band profiles for
//!   continuous transitions between bands; brilliance runs to Nyquist
//! - [`equalize_sub_compress`] - the STFT approach plus soft-knee
//!   dynamic-range compression of the 20-250 Hz magnitudes
//!
//! Every call validates its input, builds a fresh gain-factor field,
//! applies it in the frequency domain, reconstructs exactly the original
//! sample count, and peak-normalizes the result. Nothing is shared between
//! invocations: a strategy is a pure function of its inputs.
//!
//! # Example
//!
//! ```rust
//! use siete_eq::{AudioBuffer, BandGains, EqMethod, equalize};
//!
//! let buffer = AudioBuffer::from_mono(vec![0.0; 4410]);
//! let gains = BandGains::new(0.0, 6.0, 0.0, 0.0, 0.0, 0.0, -3.0);
//!
//! let output = equalize(EqMethod::Smooth, &buffer, 44100.0, &gains).unwrap();
//! assert_eq!(output.samples(), 4410);
//! ```

pub mod buffer;
pub mod direct;
pub mod error;
pub mod normalize;
pub mod smooth;
pub mod sub_compress;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use direct::equalize_direct;
pub use error::EqError;
pub use normalize::normalize_peak;
pub use smooth::{STFT_HOP, STFT_SIZE, equalize_smooth};
pub use sub_compress::equalize_sub_compress;

// The band vocabulary callers need to drive the strategies
pub use siete_core::bands::{BAND_COUNT, BAND_NAMES, Band, BandGains};

/// Strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqMethod {
    /// Full-spectrum FFT with rectangular band masks.
    DirectFft,
    /// STFT with Gaussian band profiles.
    Smooth,
    /// STFT with Gaussian profiles plus bass compression.
    SubCompress,
}

/// Dispatch to the selected strategy.
pub fn equalize(
    method: EqMethod,
    waveform: &AudioBuffer,
    sample_rate: f32,
    gains: &BandGains,
) -> Result<AudioBuffer, EqError> {
    match method {
        EqMethod::DirectFft => equalize_direct(waveform, sample_rate, gains),
        EqMethod::Smooth => equalize_smooth(waveform, sample_rate, gains),
        EqMethod::SubCompress => equalize_sub_compress(waveform, sample_rate, gains),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatcher_routes_all_methods() {
        let buffer = AudioBuffer::from_mono(vec![0.1; 2000]);
        for method in [EqMethod::DirectFft, EqMethod::Smooth, EqMethod::SubCompress] {
            let output = equalize(method, &buffer, 44100.0, &BandGains::FLAT).unwrap();
            assert_eq!(output.samples(), 2000);
        }
    }

    #[test]
    fn test_dispatcher_propagates_validation_errors() {
        let buffer = AudioBuffer::zeros(1, 5, 100);
        for method in [EqMethod::DirectFft, EqMethod::Smooth, EqMethod::SubCompress] {
            assert_eq!(
                equalize(method, &buffer, 44100.0, &BandGains::FLAT).unwrap_err(),
                EqError::UnsupportedChannels(5)
            );
        }
    }
}
