//! Waveform buffer model and input validation.

use crate::error::EqError;

/// A real-valued waveform laid out `[batch][channel][sample]`.
///
/// Samples are stored in one flat, row-major `Vec<f32>`; the three extents
/// are declared alongside it, which is how a rank violation stays
/// representable (and checkable) in a typed language. Buffers are plain
/// values: every equalizer call consumes a reference and returns a new
/// buffer, so nothing is shared or mutated across invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    data: Vec<f32>,
    batch: usize,
    channels: usize,
    samples: usize,
}

impl AudioBuffer {
    /// Wrap flat sample data with explicit dimensions.
    ///
    /// Fails with [`EqError::Shape`] if the data length does not equal
    /// `batch * channels * samples`. Channel-count and content checks
    /// happen later, in [`validate`](Self::validate), so that a malformed
    /// buffer can still be constructed and reported by the strategy that
    /// receives it.
    pub fn from_raw(
        data: Vec<f32>,
        batch: usize,
        channels: usize,
        samples: usize,
    ) -> Result<Self, EqError> {
        if data.len() != batch * channels * samples {
            return Err(EqError::Shape {
                batch,
                channels,
                samples,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            batch,
            channels,
            samples,
        })
    }

    /// A silent buffer of the given dimensions.
    pub fn zeros(batch: usize, channels: usize, samples: usize) -> Self {
        Self {
            data: vec![0.0; batch * channels * samples],
            batch,
            channels,
            samples,
        }
    }

    /// A single mono signal as a `[1][1][n]` buffer.
    pub fn from_mono(samples: Vec<f32>) -> Self {
        let len = samples.len();
        Self {
            data: samples,
            batch: 1,
            channels: 1,
            samples: len,
        }
    }

    /// Batch extent.
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Channel extent.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Sample extent.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of independent signals (`batch * channels`).
    pub fn num_signals(&self) -> usize {
        self.batch * self.channels
    }

    /// Flat sample data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable flat sample data.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// The samples of one `[batch, channel]` signal, indexed flat.
    pub fn signal(&self, index: usize) -> &[f32] {
        let start = index * self.samples;
        &self.data[start..start + self.samples]
    }

    /// Mutable samples of one `[batch, channel]` signal, indexed flat.
    pub fn signal_mut(&mut self, index: usize) -> &mut [f32] {
        let start = index * self.samples;
        &mut self.data[start..start + self.samples]
    }

    /// Maximum absolute sample value across the whole buffer.
    pub fn peak(&self) -> f32 {
        self.data.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    }

    /// Check the input contract for an equalizer call.
    ///
    /// Fail-fast, in order: a waveform must be present (non-empty batch and
    /// sample extents) with a positive finite sample rate; every sample must
    /// be a finite real value; the flat data length must match the declared
    /// dimensions; the channel count must be mono or stereo.
    pub fn validate(&self, sample_rate: f32) -> Result<(), EqError> {
        if self.batch == 0 || self.samples == 0 {
            return Err(EqError::MissingInput("waveform"));
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(EqError::MissingInput("sample_rate"));
        }
        if let Some((index, &value)) = self.data.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(EqError::InvalidSample { index, value });
        }
        if self.data.len() != self.batch * self.channels * self.samples {
            return Err(EqError::Shape {
                batch: self.batch,
                channels: self.channels,
                samples: self.samples,
                actual: self.data.len(),
            });
        }
        if self.channels != 1 && self.channels != 2 {
            return Err(EqError::UnsupportedChannels(self.channels));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        let err = AudioBuffer::from_raw(vec![0.0; 5], 1, 2, 3).unwrap_err();
        assert_eq!(
            err,
            EqError::Shape {
                batch: 1,
                channels: 2,
                samples: 3,
                actual: 5
            }
        );

        assert!(AudioBuffer::from_raw(vec![0.0; 6], 1, 2, 3).is_ok());
    }

    #[test]
    fn test_signal_views() {
        let data: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let buffer = AudioBuffer::from_raw(data, 2, 2, 3).unwrap();

        assert_eq!(buffer.num_signals(), 4);
        assert_eq!(buffer.signal(0), &[0.0, 1.0, 2.0]);
        assert_eq!(buffer.signal(3), &[9.0, 10.0, 11.0]);
    }

    #[test]
    fn test_peak_is_global_abs_max() {
        let buffer = AudioBuffer::from_raw(vec![0.1, -2.5, 0.3, 1.0], 1, 2, 2).unwrap();
        assert_eq!(buffer.peak(), 2.5);
    }

    #[test]
    fn test_validate_empty_waveform() {
        let buffer = AudioBuffer::zeros(1, 1, 0);
        assert_eq!(
            buffer.validate(44100.0).unwrap_err(),
            EqError::MissingInput("waveform")
        );
    }

    #[test]
    fn test_validate_sample_rate() {
        let buffer = AudioBuffer::zeros(1, 1, 8);
        assert_eq!(
            buffer.validate(0.0).unwrap_err(),
            EqError::MissingInput("sample_rate")
        );
        assert_eq!(
            buffer.validate(f32::NAN).unwrap_err(),
            EqError::MissingInput("sample_rate")
        );
        assert_eq!(
            buffer.validate(-44100.0).unwrap_err(),
            EqError::MissingInput("sample_rate")
        );
    }

    #[test]
    fn test_validate_non_finite_sample() {
        let mut buffer = AudioBuffer::zeros(1, 1, 8);
        buffer.data_mut()[3] = f32::INFINITY;
        assert!(matches!(
            buffer.validate(44100.0).unwrap_err(),
            EqError::InvalidSample { index: 3, .. }
        ));
    }

    #[test]
    fn test_validate_channel_count() {
        for channels in [3usize, 4, 8] {
            let buffer = AudioBuffer::zeros(1, channels, 16);
            assert_eq!(
                buffer.validate(44100.0).unwrap_err(),
                EqError::UnsupportedChannels(channels)
            );
        }
        assert!(AudioBuffer::zeros(1, 1, 16).validate(44100.0).is_ok());
        assert!(AudioBuffer::zeros(2, 2, 16).validate(48000.0).is_ok());
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = EqError::UnsupportedChannels(5);
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains("mono and stereo"));
    }
}
