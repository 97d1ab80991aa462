//! Windowed smooth equalizer with soft-knee bass compression.
//!
//! Same STFT/Gaussian pipeline as [`crate::smooth`], with two deliberate
//! differences in the band shaping (a symmetric ±24 dB clamp and a wider
//! Gaussian, sigma = half the band width) and one extra stage: after the
//! gain field is applied, the magnitude of the 20-250 Hz region runs
//! through a soft-knee compressor before the frames are resynthesized.
//!
//! The compressor blends its gain reduction additively —
//! `magnitude * (1 + reduction * mask)` — rather than multiplying the
//! reduction in directly. In-mask bins below the threshold therefore sit
//! at twice their shaped magnitude while bins far above it fall back
//! toward it. This exact formula is contract; downstream makeup gain and
//! peak normalization assume it.

use rustfft::num_complex::Complex;

use siete_core::bands::{Band, BandGains, bands_nyquist_top};
use siete_core::knee::SoftKnee;
use siete_core::level::{db_to_linear, magnitude_db};
use siete_core::profile::{blend_gain, gaussian};
use siete_spectral::fft::{Window, bin_frequencies};
use siete_spectral::stft::Stft;

use crate::buffer::AudioBuffer;
use crate::error::EqError;
use crate::normalize::normalize_peak;
use crate::smooth::{STFT_HOP, STFT_SIZE, apply_gain_field};

/// Symmetric gain clamp for this strategy.
const MAX_GAIN_DB: f32 = 24.0;
const MIN_GAIN_DB: f32 = -24.0;

/// Fixed compressor parameters for the bass region.
const THRESHOLD_DB: f32 = -20.0;
const RATIO: f32 = 4.0;
const KNEE_DB: f32 = 5.0;
const MAKEUP_DB: f32 = 5.0;

/// Equalize over an STFT with Gaussian band profiles plus soft-knee
/// compression of the sub-bass-through-bass magnitudes.
///
/// Gains are clamped to [-24, +24] dB. The brilliance band runs to the
/// true Nyquist frequency. Phase is carried through the compressor
/// untouched; only magnitudes are reshaped.
pub fn equalize_sub_compress(
    waveform: &AudioBuffer,
    sample_rate: f32,
    gains: &BandGains,
) -> Result<AudioBuffer, EqError> {
    waveform.validate(sample_rate)?;
    tracing::debug!(
        batch = waveform.batch(),
        channels = waveform.channels(),
        samples = waveform.samples(),
        "equalizing with windowed smooth + bass compression strategy"
    );

    let gains_linear = gains
        .clamp(MIN_GAIN_DB, MAX_GAIN_DB)
        .as_array()
        .map(db_to_linear);

    let stft = Stft::new(STFT_SIZE, STFT_HOP, Window::Hann);
    let freqs = bin_frequencies(sample_rate, stft.bins());
    let bands = bands_nyquist_top(sample_rate);
    let gain_factors = wide_gaussian_gain_field(&bands, &gains_linear, &freqs);

    // Compression region: sub_bass start through bass end, inclusive on
    // both edges (unlike the half-open band table).
    let bass_low = bands[0].low_hz;
    let bass_high = bands[1].high_hz;
    let bass_mask: Vec<bool> = freqs
        .iter()
        .map(|&f| f >= bass_low && f <= bass_high)
        .collect();

    let knee = SoftKnee::new(THRESHOLD_DB, RATIO, KNEE_DB);
    let makeup = db_to_linear(MAKEUP_DB);

    let samples = waveform.samples();
    let mut output = waveform.clone();
    for index in 0..output.num_signals() {
        let mut frames = stft.forward(waveform.signal(index));
        apply_gain_field(&mut frames, &gain_factors);
        compress_bass(&mut frames, &bass_mask, &knee, makeup);
        let time = stft.inverse(&frames, samples);
        output.signal_mut(index).copy_from_slice(&time);
    }

    normalize_peak(&mut output);
    Ok(output)
}

/// Gaussian gain field with sigma = half the band width.
///
/// Twice as wide as the smooth strategy's profiles. A zero-width band
/// substitutes one percent of its upper edge to keep the divisor nonzero
/// (the Nyquist-topped brilliance band can collapse at low sample rates).
fn wide_gaussian_gain_field(bands: &[Band], gains_linear: &[f32], freqs: &[f32]) -> Vec<f32> {
    let mut factors = vec![1.0f32; freqs.len()];
    for (band, &gain) in bands.iter().zip(gains_linear.iter()) {
        let center = band.center_hz();
        let mut width = band.width_hz();
        if width == 0.0 {
            width = band.high_hz * 0.01;
        }
        let sigma = width / 2.0;
        for (factor, &freq) in factors.iter_mut().zip(freqs.iter()) {
            *factor *= blend_gain(gain, gaussian(freq, center, sigma));
        }
    }
    factors
}

/// Soft-knee compression of in-mask magnitudes, then makeup gain over the
/// whole field. Phase is preserved bin-for-bin.
fn compress_bass(
    frames: &mut [Vec<Complex<f32>>],
    bass_mask: &[bool],
    knee: &SoftKnee,
    makeup_linear: f32,
) {
    for frame in frames.iter_mut() {
        for (bin, &in_mask) in frame.iter_mut().zip(bass_mask.iter()) {
            let magnitude = bin.norm();
            let phase = bin.arg();

            let compressed = if in_mask {
                let level_db = magnitude_db(magnitude);
                let reduction = db_to_linear(knee.gain_db(level_db));
                magnitude * (1.0 + reduction)
            } else {
                magnitude
            };

            *bin = Complex::from_polar(compressed * makeup_linear, phase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn tone(freq: f32, sample_rate: f32, len: usize, amplitude: f32) -> Vec<f32> {
        (0..len)
            .map(|i| amplitude * (2.0 * PI * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_gain_clamped_both_directions() {
        let clamped = BandGains::new(100.0, -100.0, 0.0, 0.0, 0.0, 0.0, 0.0)
            .clamp(MIN_GAIN_DB, MAX_GAIN_DB);
        assert_eq!(clamped.sub_bass_db, 24.0);
        assert_eq!(clamped.bass_db, -24.0);
    }

    #[test]
    fn test_zero_width_band_guard() {
        // At 12 kHz sample rate, brilliance is [6000, 6000): zero width.
        let bands = bands_nyquist_top(12000.0);
        assert_eq!(bands[6].width_hz(), 0.0);

        let freqs = bin_frequencies(12000.0, 1025);
        let gains = [1.0f32; 7];
        let factors = wide_gaussian_gain_field(&bands, &gains, &freqs);
        assert!(factors.iter().all(|f| f.is_finite()));
    }

    #[test]
    fn test_bass_mask_inclusive_edges() {
        let freqs = vec![19.9, 20.0, 100.0, 250.0, 250.1];
        let bands = bands_nyquist_top(44100.0);
        let mask: Vec<bool> = freqs
            .iter()
            .map(|&f| f >= bands[0].low_hz && f <= bands[1].high_hz)
            .collect();
        assert_eq!(mask, vec![false, true, true, true, false]);
    }

    #[test]
    fn test_quiet_bass_doubles_loud_bass_does_not() {
        // The additive blend means sub-threshold magnitudes gain a factor
        // of two while far-above-threshold magnitudes approach unity.
        let knee = SoftKnee::new(THRESHOLD_DB, RATIO, KNEE_DB);

        let quiet = 0.005f32; // well below -20 dB
        let reduction = db_to_linear(knee.gain_db(magnitude_db(quiet)));
        assert!((reduction - 1.0).abs() < 1e-3);
        assert!((quiet * (1.0 + reduction) / quiet - 2.0).abs() < 1e-2);

        let loud = 300.0f32; // ~+50 dB, deep into full compression
        let reduction = db_to_linear(knee.gain_db(magnitude_db(loud)));
        assert!(reduction < 0.01, "reduction {}", reduction);
        assert!(loud * (1.0 + reduction) / loud < 1.01);
    }

    #[test]
    fn test_output_shape_and_peak() {
        let sample_rate = 44100.0;
        let mut signal = tone(100.0, sample_rate, 22050, 0.8);
        let high = tone(8000.0, sample_rate, 22050, 0.1);
        for (s, h) in signal.iter_mut().zip(high.iter()) {
            *s += h;
        }
        let buffer = AudioBuffer::from_mono(signal);

        let output = equalize_sub_compress(&buffer, sample_rate, &BandGains::FLAT).unwrap();

        assert_eq!(output.batch(), 1);
        assert_eq!(output.channels(), 1);
        assert_eq!(output.samples(), 22050);
        assert!(output.peak() <= 1.0 + 1e-6);
        assert!(output.signal(0).iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_rejects_three_channels() {
        let buffer = AudioBuffer::zeros(1, 3, 256);
        assert_eq!(
            equalize_sub_compress(&buffer, 44100.0, &BandGains::FLAT).unwrap_err(),
            EqError::UnsupportedChannels(3)
        );
    }
}
