//! Siete Core - scalar primitives for multiband equalization
//!
//! This crate provides the tensor-free numeric building blocks shared by the
//! siete equalizer strategies:
//!
//! - [`level`] - dB/linear gain conversions and magnitude measurement
//! - [`knee`] - soft-knee gain computer for dynamic-range compression
//! - [`profile`] - Gaussian band-shaping profiles
//! - [`bands`] - the seven-band frequency taxonomy and per-band gains
//!
//! Everything here is a pure function of its inputs: no allocation, no state,
//! no dependency on any FFT backend. This keeps the compression curve and the
//! band math independently unit-testable without running a spectral pipeline.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! siete-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bands;
pub mod knee;
pub mod level;
pub mod profile;

// Re-export main types at crate root
pub use bands::{BAND_COUNT, BAND_NAMES, BANDS_FIXED_TOP, Band, BandGains, bands_nyquist_top};
pub use knee::SoftKnee;
pub use level::{db_to_linear, linear_to_db, magnitude_db};
pub use profile::{blend_gain, gaussian};
