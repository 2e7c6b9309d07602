//! Sheet entries: concrete presets or aliases.

use serde::{Deserialize, Serialize};

use crate::preset::Preset;

/// A sheet entry that is either a concrete preset or an alias to another entry.
///
/// In YAML or JSON a bare string is an alias; a map is a preset:
///
/// ```yaml
/// warning: { fore: yellow, style: bold }
/// caution: warning
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetValue {
    /// The name of another entry.
    Alias(String),
    /// A concrete preset.
    Concrete(Preset),
}

impl PresetValue {
    pub fn is_alias(&self) -> bool {
        matches!(self, PresetValue::Alias(_))
    }
}

impl From<Preset> for PresetValue {
    fn from(preset: Preset) -> Self {
        PresetValue::Concrete(preset)
    }
}

impl From<&str> for PresetValue {
    fn from(name: &str) -> Self {
        PresetValue::Alias(name.to_string())
    }
}

impl From<String> for PresetValue {
    fn from(name: String) -> Self {
        PresetValue::Alias(name)
    }
}
