//! The seven-band frequency taxonomy shared by every equalizer strategy.
//!
//! Bands are ordered, named, half-open intervals `[low_hz, high_hz)`. Two
//! table constructors exist because the strategies genuinely differ: the
//! direct-FFT path caps brilliance at a fixed 20 kHz, while the windowed
//! paths run it to the true Nyquist frequency. The two must never be
//! unified; the asymmetry is observable behavior.

/// A named frequency band covering the half-open interval `[low_hz, high_hz)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Band name, one of [`BAND_NAMES`].
    pub name: &'static str,
    /// Lower edge in Hz (inclusive).
    pub low_hz: f32,
    /// Upper edge in Hz (exclusive).
    pub high_hz: f32,
}

impl Band {
    /// Create a new band.
    pub const fn new(name: &'static str, low_hz: f32, high_hz: f32) -> Self {
        Self {
            name,
            low_hz,
            high_hz,
        }
    }

    /// Arithmetic center of the band in Hz.
    #[inline]
    pub fn center_hz(&self) -> f32 {
        (self.low_hz + self.high_hz) / 2.0
    }

    /// Width of the band in Hz.
    #[inline]
    pub fn width_hz(&self) -> f32 {
        self.high_hz - self.low_hz
    }

    /// Whether a frequency falls inside the half-open interval.
    #[inline]
    pub fn contains(&self, freq_hz: f32) -> bool {
        freq_hz >= self.low_hz && freq_hz < self.high_hz
    }
}

/// Number of bands in the taxonomy.
pub const BAND_COUNT: usize = 7;

/// Band names in table order.
pub const BAND_NAMES: [&str; BAND_COUNT] = [
    "sub_bass",
    "bass",
    "low_mid",
    "mid",
    "upper_mid",
    "presence",
    "brilliance",
];

const SUB_BASS: Band = Band::new("sub_bass", 20.0, 60.0);
const BASS: Band = Band::new("bass", 60.0, 250.0);
const LOW_MID: Band = Band::new("low_mid", 250.0, 500.0);
const MID: Band = Band::new("mid", 500.0, 2000.0);
const UPPER_MID: Band = Band::new("upper_mid", 2000.0, 4000.0);
const PRESENCE: Band = Band::new("presence", 4000.0, 6000.0);

/// Band table for the direct-FFT strategy: brilliance capped at 20 kHz.
///
/// Bins above 20 kHz (when the sample rate allows them) belong to no band
/// and pass through unchanged.
pub const BANDS_FIXED_TOP: [Band; BAND_COUNT] = [
    SUB_BASS,
    BASS,
    LOW_MID,
    MID,
    UPPER_MID,
    PRESENCE,
    Band::new("brilliance", 6000.0, 20000.0),
];

/// Band table for the windowed strategies: brilliance runs to Nyquist.
pub fn bands_nyquist_top(sample_rate: f32) -> [Band; BAND_COUNT] {
    [
        SUB_BASS,
        BASS,
        LOW_MID,
        MID,
        UPPER_MID,
        PRESENCE,
        Band::new("brilliance", 6000.0, sample_rate / 2.0),
    ]
}

/// Per-band gain adjustments in decibels.
///
/// One value per entry of the band table, in table order. Strategies clamp
/// these to their own safe ranges before converting to linear gain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandGains {
    /// Sub-bass gain in dB (20-60 Hz).
    pub sub_bass_db: f32,
    /// Bass gain in dB (60-250 Hz).
    pub bass_db: f32,
    /// Low-mid gain in dB (250-500 Hz).
    pub low_mid_db: f32,
    /// Mid gain in dB (500-2000 Hz).
    pub mid_db: f32,
    /// Upper-mid gain in dB (2000-4000 Hz).
    pub upper_mid_db: f32,
    /// Presence gain in dB (4000-6000 Hz).
    pub presence_db: f32,
    /// Brilliance gain in dB (6000 Hz and up).
    pub brilliance_db: f32,
}

impl BandGains {
    /// All bands at 0 dB.
    pub const FLAT: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Create gains from the seven per-band values, in band-table order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        sub_bass_db: f32,
        bass_db: f32,
        low_mid_db: f32,
        mid_db: f32,
        upper_mid_db: f32,
        presence_db: f32,
        brilliance_db: f32,
    ) -> Self {
        Self {
            sub_bass_db,
            bass_db,
            low_mid_db,
            mid_db,
            upper_mid_db,
            presence_db,
            brilliance_db,
        }
    }

    /// Gains as an array in band-table order.
    pub const fn as_array(&self) -> [f32; BAND_COUNT] {
        [
            self.sub_bass_db,
            self.bass_db,
            self.low_mid_db,
            self.mid_db,
            self.upper_mid_db,
            self.presence_db,
            self.brilliance_db,
        ]
    }

    /// Build gains from an array in band-table order.
    pub const fn from_array(values: [f32; BAND_COUNT]) -> Self {
        Self::new(
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
        )
    }

    /// Clamp every gain to at most `max_db`, leaving cuts untouched.
    pub fn clamp_upper(&self, max_db: f32) -> Self {
        Self::from_array(self.as_array().map(|g| g.min(max_db)))
    }

    /// Clamp every gain into `[min_db, max_db]`.
    pub fn clamp(&self, min_db: f32, max_db: f32) -> Self {
        Self::from_array(self.as_array().map(|g| g.clamp(min_db, max_db)))
    }
}
