//! Short-time Fourier transform with overlap-add resynthesis.
//!
//! The forward transform mirrors the centered STFT convention: the signal
//! is padded by half a window on each side with reflected samples, so frame
//! `k` is centered on sample `k * hop` and a length-`n` signal yields
//! `1 + n/hop` frames. The inverse applies the synthesis window, overlap-adds,
//! divides by the accumulated squared window, trims the center padding, and
//! returns exactly the requested number of samples — which makes
//! forward-then-inverse an identity up to floating-point error.

use rustfft::num_complex::Complex;

use crate::fft::{RealFft, Window};

/// Short-time Fourier transform processor.
pub struct Stft {
    fft: RealFft,
    fft_size: usize,
    hop_size: usize,
    window: Vec<f32>,
}

impl Stft {
    /// Create an STFT processor.
    ///
    /// # Arguments
    /// * `fft_size` - Window/FFT length in samples
    /// * `hop_size` - Samples between consecutive frame centers
    /// * `window` - Analysis/synthesis window function
    pub fn new(fft_size: usize, hop_size: usize, window: Window) -> Self {
        Self {
            fft: RealFft::new(fft_size),
            fft_size,
            hop_size,
            window: window.coefficients(fft_size),
        }
    }

    /// FFT size in samples.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Hop size in samples.
    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// Number of one-sided frequency bins per frame (`fft_size/2 + 1`).
    pub fn bins(&self) -> usize {
        self.fft.bins()
    }

    /// Number of frames produced for a signal of `signal_len` samples.
    pub fn num_frames(&self, signal_len: usize) -> usize {
        1 + signal_len / self.hop_size
    }

    /// Forward transform: one one-sided complex spectrum per centered frame.
    pub fn forward(&self, signal: &[f32]) -> Vec<Vec<Complex<f32>>> {
        let pad = self.fft_size / 2;
        let padded = reflect_pad(signal, pad);

        let num_frames = if padded.len() >= self.fft_size {
            (padded.len() - self.fft_size) / self.hop_size + 1
        } else {
            0
        };

        let mut frames = Vec::with_capacity(num_frames);
        let mut frame = vec![0.0f32; self.fft_size];

        for frame_idx in 0..num_frames {
            let start = frame_idx * self.hop_size;
            frame.copy_from_slice(&padded[start..start + self.fft_size]);
            for (sample, &coeff) in frame.iter_mut().zip(self.window.iter()) {
                *sample *= coeff;
            }
            frames.push(self.fft.forward(&frame));
        }

        frames
    }

    /// Inverse transform via windowed overlap-add, returning exactly
    /// `length` samples.
    pub fn inverse(&self, frames: &[Vec<Complex<f32>>], length: usize) -> Vec<f32> {
        if frames.is_empty() {
            return vec![0.0; length];
        }

        let pad = self.fft_size / 2;
        let total = (frames.len() - 1) * self.hop_size + self.fft_size;
        let mut output = vec![0.0f32; total];
        let mut envelope = vec![0.0f32; total];

        for (frame_idx, frame) in frames.iter().enumerate() {
            let time = self.fft.inverse(frame);
            let start = frame_idx * self.hop_size;
            for i in 0..self.fft_size {
                output[start + i] += time[i] * self.window[i];
                envelope[start + i] += self.window[i] * self.window[i];
            }
        }

        // Normalize by the accumulated squared window; near-zero bins at the
        // padded edges carry no signal and are left as silence.
        for (sample, &weight) in output.iter_mut().zip(envelope.iter()) {
            if weight > 1e-8 {
                *sample /= weight;
            }
        }

        // Trim the center padding and fit the requested length
        let mut result: Vec<f32> = output.into_iter().skip(pad).take(length).collect();
        result.resize(length, 0.0);
        result
    }
}

/// Pad a signal by `pad` samples on each side with reflected content.
///
/// Reflection excludes the boundary sample and bounces at the edges, so
/// signals shorter than the pad width still produce a full-length result.
fn reflect_pad(signal: &[f32], pad: usize) -> Vec<f32> {
    let len = signal.len() as isize;
    let mut padded = Vec::with_capacity(signal.len() + 2 * pad);
    for i in -(pad as isize)..len + pad as isize {
        padded.push(signal[reflect_index(i, len)]);
    }
    padded
}

fn reflect_index(i: isize, len: isize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let mut k = i.rem_euclid(period);
    if k >= len {
        k = period - k;
    }
    k as usize
}
