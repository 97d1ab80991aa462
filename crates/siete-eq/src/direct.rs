//! Direct full-spectrum FFT equalizer.
//!
//! The bluntest of the three strategies: one real FFT over the whole
//! buffer, a rectangular gain mask per band, one inverse FFT. Band edges
//! are hard cutoffs, so boosts can ring audibly at the boundaries — the
//! windowed strategies exist to smooth exactly that out.

use siete_core::bands::{BANDS_FIXED_TOP, BandGains};
use siete_core::level::db_to_linear;
use siete_spectral::fft::{RealFft, bin_frequencies};

use crate::buffer::AudioBuffer;
use crate::error::EqError;
use crate::normalize::normalize_peak;

/// Equalize with a full-buffer FFT and rectangular per-band masks.
///
/// Gains are applied unclamped. The brilliance band is capped at a fixed
/// 20 kHz: bins above it (up to Nyquist, at sample rates beyond 40 kHz)
/// pass through with unit gain.
pub fn equalize_direct(
    waveform: &AudioBuffer,
    sample_rate: f32,
    gains: &BandGains,
) -> Result<AudioBuffer, EqError> {
    waveform.validate(sample_rate)?;
    tracing::debug!(
        batch = waveform.batch(),
        channels = waveform.channels(),
        samples = waveform.samples(),
        "equalizing with direct-fft strategy"
    );

    let gains_linear = gains.as_array().map(db_to_linear);

    let samples = waveform.samples();
    let fft = RealFft::new(samples);
    let freqs = bin_frequencies(sample_rate, fft.bins());

    // Per-bin multipliers, shared by every signal in the batch. The bands
    // are disjoint half-open intervals, so application order is irrelevant.
    let mut gain_factors = vec![1.0f32; fft.bins()];
    for (band, gain) in BANDS_FIXED_TOP.iter().zip(gains_linear) {
        for (factor, &freq) in gain_factors.iter_mut().zip(freqs.iter()) {
            if band.contains(freq) {
                *factor *= gain;
            }
        }
    }

    let mut output = waveform.clone();
    for index in 0..output.num_signals() {
        let mut spectrum = fft.forward(waveform.signal(index));
        for (bin, &factor) in spectrum.iter_mut().zip(gain_factors.iter()) {
            *bin *= factor;
        }
        let time = fft.inverse(&spectrum);
        output.signal_mut(index).copy_from_slice(&time);
    }

    normalize_peak(&mut output);
    Ok(output)
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
    fn test_flat_gains_reconstruct_input() {
        let sample_rate = 44100.0;
        let signal = tone(100.0, sample_rate, 4410, 0.5);
        let buffer = AudioBuffer::from_mono(signal.clone());

        let output = equalize_direct(&buffer, sample_rate, &BandGains::FLAT).unwrap();

        assert_eq!(output.samples(), 4410);
        for (a, b) in signal.iter().zip(output.signal(0)) {
            assert!((a - b).abs() < 1e-4, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_cut_reduces_band_energy() {
        let sample_rate = 44100.0;
        let signal = tone(1000.0, sample_rate, 4410, 0.5);
        let buffer = AudioBuffer::from_mono(signal);

        // 1000 Hz sits in the mid band
        let gains = BandGains::new(0.0, 0.0, 0.0, -12.0, 0.0, 0.0, 0.0);
        let output = equalize_direct(&buffer, sample_rate, &gains).unwrap();

        let out_rms = (output.signal(0).iter().map(|s| s * s).sum::<f32>() / 4410.0).sqrt();
        let in_rms = 0.5 / 2.0f32.sqrt();
        let ratio = out_rms / in_rms;
        assert!(
            (ratio - 0.2512).abs() < 0.02,
            "-12 dB cut should scale RMS by ~0.25, got {}",
            ratio
        );
    }

    #[test]
    fn test_frequencies_above_fixed_top_untouched() {
        let sample_rate = 96000.0;
        // 30 kHz is above the 20 kHz brilliance cap
        let signal = tone(30000.0, sample_rate, 9600, 0.4);
        let buffer = AudioBuffer::from_mono(signal.clone());

        let gains = BandGains::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -24.0);
        let output = equalize_direct(&buffer, sample_rate, &gains).unwrap();

        for (a, b) in signal.iter().zip(output.signal(0)) {
            assert!((a - b).abs() < 1e-3, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_rejects_three_channels() {
        let buffer = AudioBuffer::zeros(1, 3, 128);
        assert_eq!(
            equalize_direct(&buffer, 44100.0, &BandGains::FLAT).unwrap_err(),
            EqError::UnsupportedChannels(3)
        );
    }
}
