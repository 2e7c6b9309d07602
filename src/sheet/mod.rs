//! Preset sheets: named presets loaded from configuration.
//!
//! - [`PresetSheet`]: a registry of named presets with fluent building and
//!   YAML/JSON loading
//! - [`PresetValue`]: an entry that is either a preset or an alias
//!
//! Sheets support a layered pattern where semantic names alias
//! presentation names, which in turn hold concrete presets:
//!
//! ```yaml
//! # Visual layer
//! muted: { style: dim }
//! accent: { fore: cyan, style: bold }
//!
//! # Semantic layer
//! disabled: muted
//! timestamp: disabled
//! ```

mod registry;
mod value;

pub use registry::{PresetSheet, DEFAULT_MISSING_PRESET_INDICATOR};
pub use value::PresetValue;
