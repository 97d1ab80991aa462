//! Error types for equalizer input validation.

use thiserror::Error;

/// Errors raised when an input violates the engine's contract.
///
/// All variants are deterministic input-contract violations detected before
/// any transform work begins; none are transient, so there is no retry
/// story. Numeric edge cases inside the strategies (zero-width bands,
/// near-zero magnitudes) are handled with epsilon guards instead of errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EqError {
    /// Waveform or sample rate absent at the call boundary.
    #[error("audio input is missing {0}")]
    MissingInput(&'static str),

    /// Waveform carries a value that is not a real audio sample.
    #[error("waveform is not real-valued: sample {index} is {value}")]
    InvalidSample {
        /// Flat index of the offending sample.
        index: usize,
        /// The non-finite value found there.
        value: f32,
    },

    /// Flat data length disagrees with the declared dimensions.
    #[error(
        "waveform data length {actual} does not match {batch} batch x {channels} channel x {samples} sample layout"
    )]
    Shape {
        /// Declared batch extent.
        batch: usize,
        /// Declared channel extent.
        channels: usize,
        /// Declared sample extent.
        samples: usize,
        /// Actual flat data length.
        actual: usize,
    },

    /// Channel count outside mono/stereo.
    #[error("unsupported number of channels: {0}; only mono and stereo are supported")]
    UnsupportedChannels(usize),
}
