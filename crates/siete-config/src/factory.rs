//! Factory presets bundled with the library.
//!
//! Built-in presets that are always available without external files,
//! demonstrating common gain curves and serving as starting points.

use crate::error::PresetError;
use crate::preset::EqPreset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] =
    &["flat", "bass_boost", "vocal_presence", "loudness", "air"];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("flat", FLAT_PRESET),
    ("bass_boost", BASS_BOOST_PRESET),
    ("vocal_presence", VOCAL_PRESENCE_PRESET),
    ("loudness", LOUDNESS_PRESET),
    ("air", AIR_PRESET),
];

/// Neutral starting point.
const FLAT_PRESET: &str = r#"
name = "Flat"
description = "All bands at 0 dB"
method = "hann"

[gains]
"#;

/// Low-end weight with compression keeping it controlled.
const BASS_BOOST_PRESET: &str = r#"
name = "Bass Boost"
description = "Round low end for small speakers, compressed to stay tight"
method = "subcomp"

[gains]
sub_bass = 6.0
bass = 4.0
low_mid = 1.0
"#;

/// Forward mids for spoken word.
const VOCAL_PRESENCE_PRESET: &str = r#"
name = "Vocal Presence"
description = "Forward mids and presence for speech intelligibility"
method = "hann"

[gains]
low_mid = -2.0
mid = 2.0
upper_mid = 3.0
presence = 4.0
"#;

/// Classic smile curve.
const LOUDNESS_PRESET: &str = r#"
name = "Loudness"
description = "Smile curve for low-level listening"
method = "hann"

[gains]
sub_bass = 5.0
bass = 3.0
mid = -2.0
presence = 2.0
brilliance = 4.0
"#;

/// Top-octave sheen via the direct path.
const AIR_PRESET: &str = r#"
name = "Air"
description = "High-shelf sparkle with untouched lows"
method = "rfft"

[gains]
presence = 2.0
brilliance = 5.0
"#;

/// All factory presets, parsed.
pub fn factory_presets() -> Vec<EqPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .map(|(name, toml)| {
            EqPreset::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory preset '{name}' is invalid: {e}"))
        })
        .collect()
}

/// Look up a factory preset by name.
pub fn factory_preset(name: &str) -> Result<EqPreset, PresetError> {
    FACTORY_PRESETS_TOML
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, toml)| EqPreset::from_toml(toml))
        .ok_or_else(|| PresetError::PresetNotFound(name.to_string()))?
}

/// Whether a name refers to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    FACTORY_PRESET_NAMES.contains(&name)
}
