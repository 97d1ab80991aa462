//! Siete Spectral - FFT and STFT transforms for whole-buffer equalization
//!
//! This crate wraps [`rustfft`] with the two transform shapes the equalizer
//! strategies need:
//!
//! - [`fft::RealFft`] - planned forward/inverse one-sided real FFT of a
//!   fixed length, for full-spectrum masking
//! - [`stft::Stft`] - centered short-time Fourier transform with reflective
//!   edge padding and windowed overlap-add resynthesis, for time-localized
//!   gain shaping
//!
//! Both transforms reconstruct a real signal at an exact requested sample
//! count, which is what lets the equalizer guarantee output shape equals
//! input shape.

pub mod fft;
pub mod stft;

// Re-export main types at crate root
pub use fft::{RealFft, Window, bin_frequencies};
pub use stft::Stft;
