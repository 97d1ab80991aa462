//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use siete_core::bands::{BAND_NAMES, BandGains};
use siete_eq::EqMethod;

use crate::error::PresetError;

/// Host-declared per-band gain bounds in dB.
///
/// The strategies clamp harder where they need to; this range is what a
/// preset file is allowed to declare.
pub const GAIN_RANGE_DB: (f32, f32) = (-12.0, 12.0);

/// Preset file format for equalizer settings.
///
/// Presets are stored as TOML files naming a strategy and the seven
/// per-band gains. They can be loaded from files, created
/// programmatically, and saved to disk.
///
/// # TOML Format
///
/// ```toml
/// name = "Bass Boost"
/// description = "Round low end for small speakers"
/// method = "hann"
///
/// [gains]
/// sub_bass = 6.0
/// bass = 4.0
/// low_mid = 0.0
/// mid = 0.0
/// upper_mid = 0.0
/// presence = 0.0
/// brilliance = 0.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EqPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Strategy name: `"rfft"`, `"hann"`, or `"subcomp"`.
    #[serde(default = "default_method")]
    pub method: String,

    /// Per-band gains in dB.
    #[serde(default)]
    pub gains: GainTable,
}

fn default_method() -> String {
    "hann".to_string()
}

/// The seven per-band gains of a preset, in dB.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct GainTable {
    /// Sub-bass gain (20-60 Hz).
    #[serde(default)]
    pub sub_bass: f32,
    /// Bass gain (60-250 Hz).
    #[serde(default)]
    pub bass: f32,
    /// Low-mid gain (250-500 Hz).
    #[serde(default)]
    pub low_mid: f32,
    /// Mid gain (500-2000 Hz).
    #[serde(default)]
    pub mid: f32,
    /// Upper-mid gain (2000-4000 Hz).
    #[serde(default)]
    pub upper_mid: f32,
    /// Presence gain (4000-6000 Hz).
    #[serde(default)]
    pub presence: f32,
    /// Brilliance gain (6000 Hz and up).
    #[serde(default)]
    pub brilliance: f32,
}

impl EqPreset {
    /// Create a new flat preset with the default method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            method: default_method(),
            gains: GainTable::default(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the strategy by enum rather than string.
    pub fn with_method(mut self, method: EqMethod) -> Self {
        self.method = match method {
            EqMethod::DirectFft => "rfft",
            EqMethod::Smooth => "hann",
            EqMethod::SubCompress => "subcomp",
        }
        .to_string();
        self
    }

    /// Set the gain table.
    pub fn with_gains(mut self, gains: GainTable) -> Self {
        self.gains = gains;
        self
    }

    /// Resolve the method string to a strategy selector.
    pub fn method(&self) -> Result<EqMethod, PresetError> {
        match self.method.as_str() {
            "rfft" => Ok(EqMethod::DirectFft),
            "hann" => Ok(EqMethod::Smooth),
            "subcomp" => Ok(EqMethod::SubCompress),
            other => Err(PresetError::UnknownMethod(other.to_string())),
        }
    }

    /// The preset's gains as engine band gains.
    pub fn band_gains(&self) -> BandGains {
        BandGains::new(
            self.gains.sub_bass,
            self.gains.bass,
            self.gains.low_mid,
            self.gains.mid,
            self.gains.upper_mid,
            self.gains.presence,
            self.gains.brilliance,
        )
    }

    /// Check that the method is known and every gain sits inside
    /// [`GAIN_RANGE_DB`].
    pub fn validate(&self) -> Result<(), PresetError> {
        self.method()?;
        let (min, max) = GAIN_RANGE_DB;
        for (value, band) in self.band_gains().as_array().iter().zip(BAND_NAMES) {
            if !value.is_finite() || *value < min || *value > max {
                return Err(PresetError::GainOutOfRange {
                    band,
                    value: *value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PresetError::read_file(path, e))?;
        let preset: EqPreset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PresetError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| PresetError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| PresetError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, PresetError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let preset = EqPreset::new("Test")
            .with_description("roundtrip")
            .with_method(EqMethod::SubCompress)
            .with_gains(GainTable {
                sub_bass: 6.0,
                bass: 4.0,
                mid: -3.0,
                ..GainTable::default()
            });

        let toml_str = preset.to_toml().unwrap();
        let parsed = EqPreset::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, preset);
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(
            EqPreset::new("a").with_method(EqMethod::DirectFft).method().unwrap(),
            EqMethod::DirectFft
        );
        assert_eq!(EqPreset::new("a").method().unwrap(), EqMethod::Smooth);

        let mut preset = EqPreset::new("a");
        preset.method = "fir".to_string();
        assert!(matches!(
            preset.method().unwrap_err(),
            PresetError::UnknownMethod(m) if m == "fir"
        ));
    }

    #[test]
    fn test_missing_gains_default_to_flat() {
        let preset = EqPreset::from_toml("name = \"Minimal\"").unwrap();
        assert_eq!(preset.band_gains(), BandGains::FLAT);
        assert_eq!(preset.method().unwrap(), EqMethod::Smooth);
    }

    #[test]
    fn test_partial_gain_table() {
        let preset = EqPreset::from_toml(
            "name = \"Partial\"\nmethod = \"rfft\"\n[gains]\nbass = 5.0\n",
        )
        .unwrap();
        let gains = preset.band_gains();
        assert_eq!(gains.bass_db, 5.0);
        assert_eq!(gains.mid_db, 0.0);
    }

    #[test]
    fn test_validate_gain_range() {
        let ok = EqPreset::new("ok").with_gains(GainTable {
            sub_bass: 12.0,
            brilliance: -12.0,
            ..GainTable::default()
        });
        assert!(ok.validate().is_ok());

        let too_hot = EqPreset::new("hot").with_gains(GainTable {
            presence: 12.5,
            ..GainTable::default()
        });
        assert!(matches!(
            too_hot.validate().unwrap_err(),
            PresetError::GainOutOfRange { band: "presence", .. }
        ));
    }

    #[test]
    fn test_band_gains_order() {
        let preset = EqPreset::new("order").with_gains(GainTable {
            sub_bass: 1.0,
            bass: 2.0,
            low_mid: 3.0,
            mid: 4.0,
            upper_mid: 5.0,
            presence: 6.0,
            brilliance: 7.0,
        });
        assert_eq!(
            preset.band_gains().as_array(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]
        );
    }
}
