//! Named preset registry with alias resolution.

use std::collections::BTreeMap;

use tracing::debug;

use super::value::PresetValue;
use crate::error::PresetError;
use crate::preset::{Overrides, Preset};
use crate::styled::Styled;

/// Appended to text rendered with a preset that can't be resolved.
pub const DEFAULT_MISSING_PRESET_INDICATOR: &str = "(!?)";

/// A named collection of presets, loadable from YAML or JSON.
///
/// Entries can alias each other, so semantic names ("timestamp") can point
/// at presentation names ("muted") that hold the concrete values. Colors are
/// not checked on load; call [`PresetSheet::validate`] to check the aliases
/// and render to find bad values.
///
/// The one exception is the RGB list form: its channels are `u8`, so an entry
/// like `back: [300, 0, 0]` fails the whole load with [`PresetError::Parse`].
/// An out-of-range index such as `fore: 300` loads and fails only when
/// rendered.
///
/// # Example
///
/// ```rust
/// use ansi_presets::PresetSheet;
///
/// let sheet = PresetSheet::from_yaml(r#"
/// warning: { fore: yellow, style: bold }
/// error:
///   fore: red
///   back: [40, 0, 0]
/// caution: warning
/// "#).unwrap();
///
/// sheet.validate().unwrap();
/// assert_eq!(sheet.get("caution").unwrap(), sheet.get("warning").unwrap());
/// assert_eq!(sheet.apply("caution", "careful"), "\x1b[33m\x1b[1mcareful\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetSheet {
    entries: BTreeMap<String, PresetValue>,
    missing_indicator: String,
}

impl PresetSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            missing_indicator: DEFAULT_MISSING_PRESET_INDICATOR.to_string(),
        }
    }

    /// Parses a sheet from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Parse`] when the document is not a map of
    /// names to presets or alias strings.
    pub fn from_yaml(source: &str) -> Result<Self, PresetError> {
        let entries: BTreeMap<String, PresetValue> = serde_yaml::from_str(source)?;
        debug!(count = entries.len(), "loaded preset sheet from yaml");
        Ok(Self::from_entries(entries))
    }

    /// Parses a sheet from JSON.
    pub fn from_json(source: &str) -> Result<Self, PresetError> {
        let entries: BTreeMap<String, PresetValue> = serde_json::from_str(source)?;
        debug!(count = entries.len(), "loaded preset sheet from json");
        Ok(Self::from_entries(entries))
    }

    fn from_entries(entries: BTreeMap<String, PresetValue>) -> Self {
        Self {
            entries,
            ..Self::new()
        }
    }

    /// Serializes the entries back to YAML.
    pub fn to_yaml(&self) -> Result<String, PresetError> {
        Ok(serde_yaml::to_string(&self.entries)?)
    }

    /// Adds a named entry, returning the updated sheet for chaining.
    ///
    /// The value can be a [`Preset`] or a `&str`/`String` alias.
    #[must_use]
    pub fn add<V: Into<PresetValue>>(mut self, name: &str, value: V) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Uses a different marker for presets that can't be resolved.
    #[must_use]
    pub fn with_missing_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.missing_indicator = indicator.into();
        self
    }

    /// Copies every entry of `other` into this sheet, replacing same-named ones.
    #[must_use]
    pub fn extend(mut self, other: &PresetSheet) -> Self {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|name| name.as_str())
    }

    /// Returns the raw entry without following aliases.
    pub fn entry(&self, name: &str) -> Option<&PresetValue> {
        self.entries.get(name)
    }

    /// Resolves `name` through any aliases to a concrete preset.
    ///
    /// # Errors
    ///
    /// - [`PresetError::UnknownPreset`] if `name` has no entry
    /// - [`PresetError::UnresolvedAlias`] if an alias points nowhere
    /// - [`PresetError::CycleDetected`] if aliases loop
    pub fn get(&self, name: &str) -> Result<&Preset, PresetError> {
        let mut current = name;
        let mut path: Vec<&str> = vec![name];
        loop {
            let value = match self.entries.get(current) {
                Some(value) => value,
                None if path.len() == 1 => {
                    return Err(PresetError::UnknownPreset {
                        name: name.to_string(),
                    })
                }
                None => {
                    return Err(PresetError::UnresolvedAlias {
                        from: path[path.len() - 2].to_string(),
                        to: current.to_string(),
                    })
                }
            };
            match value {
                PresetValue::Concrete(preset) => return Ok(preset),
                PresetValue::Alias(target) => {
                    let target = target.as_str();
                    if path.contains(&target) {
                        path.push(target);
                        return Err(PresetError::CycleDetected {
                            path: path.iter().map(|s| s.to_string()).collect(),
                        });
                    }
                    path.push(target);
                    current = target;
                }
            }
        }
    }

    /// Checks that every alias resolves.
    ///
    /// Color and style values are not checked here; they are validated when
    /// a preset is rendered.
    pub fn validate(&self) -> Result<(), PresetError> {
        for name in self.entries.keys() {
            if let Err(err) = self.get(name) {
                debug!(preset = %name, error = %err, "preset sheet failed validation");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Invokes the named preset on `text`.
    ///
    /// # Errors
    ///
    /// Alias errors from [`PresetSheet::get`], or color/style validation errors.
    pub fn try_apply(
        &self,
        name: &str,
        text: &str,
        overrides: &Overrides,
    ) -> Result<Styled, PresetError> {
        self.get(name)?.call_with(text, overrides)
    }

    /// Invokes the named preset on `text`, never failing.
    ///
    /// When the preset can't be resolved or rendered, the text comes back
    /// unstyled with the missing indicator appended.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.try_apply(name, text, &Overrides::new()) {
            Ok(styled) => styled.to_string(),
            Err(err) => {
                debug!(preset = %name, error = %err, "falling back to unstyled text");
                format!("{} {}", text, self.missing_indicator)
            }
        }
    }
}

impl Default for PresetSheet {
    fn default() -> Self {
        Self::new()
    }
}
