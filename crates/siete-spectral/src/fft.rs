//! One-sided real FFT with windowing functions.

use rustfft::{FftPlanner, num_complex::Complex};
use std::f32::consts::PI;
use std::sync::Arc;

/// Window function types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Rectangular (no windowing)
    Rectangular,
    /// Periodic Hann window (raised cosine, DFT-even)
    Hann,
}

impl Window {
    /// Apply window to a buffer.
    pub fn apply(&self, buffer: &mut [f32]) {
        let n = buffer.len();
        match self {
            Window::Rectangular => {}
            Window::Hann => {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    let w = 0.5 * (1.0 - (2.0 * PI * i as f32 / n as f32).cos());
                    *sample *= w;
                }
            }
        }
    }

    /// Get window coefficients.
    pub fn coefficients(&self, size: usize) -> Vec<f32> {
        let mut coeffs = vec![1.0; size];
        self.apply(&mut coeffs);
        coeffs
    }
}

/// Frequency bin centers as a linear distribution over `[0, sample_rate/2]`.
///
/// For an even transform length the result coincides with the true
/// `k * sample_rate / n` grid of a one-sided spectrum.
pub fn bin_frequencies(sample_rate: f32, bins: usize) -> Vec<f32> {
    if bins <= 1 {
        return vec![0.0; bins];
    }
    let nyquist = sample_rate / 2.0;
    (0..bins)
        .map(|i| nyquist * i as f32 / (bins - 1) as f32)
        .collect()
}

/// Planned forward/inverse real FFT of a fixed transform length.
///
/// The forward transform returns only the positive-frequency half
/// (`len/2 + 1` bins, DC through Nyquist); the inverse reconstructs the
/// negative half by conjugate symmetry and returns a real signal of the
/// original length.
pub struct RealFft {
    fft: Arc<dyn rustfft::Fft<f32>>,
    ifft: Arc<dyn rustfft::Fft<f32>>,
    len: usize,
}

impl RealFft {
    /// Create a transform for signals of `len` samples.
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(len);
        let ifft = planner.plan_fft_inverse(len);

        Self { fft, ifft, len }
    }

    /// Transform length in samples.
    pub fn transform_len(&self) -> usize {
        self.len
    }

    /// Number of one-sided spectrum bins (`len/2 + 1`).
    pub fn bins(&self) -> usize {
        self.len / 2 + 1
    }

    /// Forward transform of a real signal into a one-sided complex spectrum.
    ///
    /// Input shorter than the transform length is zero-padded; longer input
    /// is truncated.
    pub fn forward(&self, input: &[f32]) -> Vec<Complex<f32>> {
        let mut buffer: Vec<Complex<f32>> = input
            .iter()
            .take(self.len)
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(self.len, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer.truncate(self.bins());
        buffer
    }

    /// Inverse transform of a one-sided spectrum back to a real signal of
    /// the transform length.
    pub fn inverse(&self, spectrum: &[Complex<f32>]) -> Vec<f32> {
        let bins = self.bins();
        let mut full = vec![Complex::new(0.0, 0.0); self.len];
        for (slot, value) in full.iter_mut().zip(spectrum.iter().take(bins)) {
            *slot = *value;
        }
        // Negative frequencies by conjugate symmetry: full[k] = conj(full[n-k])
        for k in bins..self.len {
            full[k] = full[self.len - k].conj();
        }

        self.ifft.process(&mut full);

        // rustfft is unnormalized; scale and keep the real part
        let scale = 1.0 / self.len as f32;
        full.iter().map(|c| c.re * scale).collect()
    }
}
