//! Preset management for the siete equalizer.
//!
//! Named equalizer settings — a strategy plus the seven per-band gains —
//! stored as TOML files, with a set of factory presets embedded in the
//! library.
//!
//! # Example
//!
//! ```rust,no_run
//! use siete_config::{EqPreset, factory_preset};
//! use siete_eq::{AudioBuffer, equalize};
//!
//! // Load a preset from file
//! let preset = EqPreset::load("my_preset.toml").unwrap();
//! preset.validate().unwrap();
//!
//! // Or start from a factory preset
//! let preset = factory_preset("bass_boost").unwrap();
//!
//! let buffer = AudioBuffer::from_mono(vec![0.0; 44100]);
//! let output = equalize(
//!     preset.method().unwrap(),
//!     &buffer,
//!     44100.0,
//!     &preset.band_gains(),
//! )
//! .unwrap();
//! ```

mod error;
mod preset;

/// Factory presets bundled with the library.
pub mod factory;

pub use error::PresetError;
pub use factory::{FACTORY_PRESET_NAMES, factory_preset, factory_presets, is_factory_preset};
pub use preset::{EqPreset, GAIN_RANGE_DB, GainTable};
