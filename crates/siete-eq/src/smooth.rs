//! Windowed smooth equalizer with Gaussian band shaping.
//!
//! Works frame-by-frame over a short-time Fourier transform instead of the
//! whole spectrum at once, and replaces rectangular band masks with
//! Gaussian profiles that peak at each band center and decay into the
//! neighbors. Band boundaries therefore become continuous transitions, at
//! the cost of partial gain away from band centers.

use rustfft::num_complex::Complex;

use siete_core::bands::{Band, BandGains, bands_nyquist_top};
use siete_core::level::db_to_linear;
use siete_core::profile::{blend_gain, gaussian};
use siete_spectral::fft::{Window, bin_frequencies};
use siete_spectral::stft::Stft;

use crate::buffer::AudioBuffer;
use crate::error::EqError;
use crate::normalize::normalize_peak;

/// STFT window length used by both windowed strategies.
pub const STFT_SIZE: usize = 2048;

/// STFT hop length (half the window, 50% overlap).
pub const STFT_HOP: usize = 1024;

/// Upper gain clamp: boosts past this ring even through the Gaussian taper.
const MAX_BOOST_DB: f32 = 12.0;

/// Equalize over an STFT with Gaussian per-band gain profiles.
///
/// Gains are clamped to at most +12 dB (cuts are not limited). The
/// brilliance band runs to the true Nyquist frequency.
pub fn equalize_smooth(
    waveform: &AudioBuffer,
    sample_rate: f32,
    gains: &BandGains,
) -> Result<AudioBuffer, EqError> {
    waveform.validate(sample_rate)?;
    tracing::debug!(
        batch = waveform.batch(),
        channels = waveform.channels(),
        samples = waveform.samples(),
        "equalizing with windowed smooth strategy"
    );

    let gains_linear = gains
        .clamp_upper(MAX_BOOST_DB)
        .as_array()
        .map(db_to_linear);

    let stft = Stft::new(STFT_SIZE, STFT_HOP, Window::Hann);
    let freqs = bin_frequencies(sample_rate, stft.bins());
    let bands = bands_nyquist_top(sample_rate);
    let gain_factors = gaussian_gain_field(&bands, &gains_linear, &freqs);

    let samples = waveform.samples();
    let mut output = waveform.clone();
    for index in 0..output.num_signals() {
        let mut frames = stft.forward(waveform.signal(index));
        apply_gain_field(&mut frames, &gain_factors);
        let time = stft.inverse(&frames, samples);
        output.signal_mut(index).copy_from_slice(&time);
    }

    normalize_peak(&mut output);
    Ok(output)
}

/// Per-bin multipliers from Gaussian band profiles, broadcast over frames.
///
/// Each band contributes `1 + (gain - 1) * exp(-((f - center) / sigma)^2 / 2)`
/// with `sigma` a quarter of the band width; contributions compose
/// multiplicatively so overlapping tails combine.
fn gaussian_gain_field(bands: &[Band], gains_linear: &[f32], freqs: &[f32]) -> Vec<f32> {
    let mut factors = vec![1.0f32; freqs.len()];
    for (band, &gain) in bands.iter().zip(gains_linear.iter()) {
        let center = band.center_hz();
        let sigma = band.width_hz() / 4.0;
        for (factor, &freq) in factors.iter_mut().zip(freqs.iter()) {
            *factor *= blend_gain(gain, gaussian(freq, center, sigma));
        }
    }
    factors
}

/// Multiply every frame of an STFT by a per-bin gain field.
pub(crate) fn apply_gain_field(frames: &mut [Vec<Complex<f32>>], factors: &[f32]) {
    for frame in frames.iter_mut() {
        for (bin, &factor) in frame.iter_mut().zip(factors.iter()) {
            *bin *= factor;
        }
    }
}
