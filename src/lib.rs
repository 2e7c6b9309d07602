//! # ansi-presets
//!
//! Reusable bundles of terminal colors and styles that stamp ANSI escape
//! codes onto text.
//!
//! A [`Preset`] holds up to three attributes: a foreground color, a
//! background color, and a text style. Calling it wraps text in the matching
//! escape codes followed by a reset:
//!
//! ```rust
//! use ansi_presets::Preset;
//!
//! let warn = Preset::new().with_fore("red").with_back("white").with_style("bold");
//! let styled = warn.call("Watch out!").unwrap();
//! assert_eq!(styled.to_string(), "\x1b[31m\x1b[47m\x1b[1mWatch out!\x1b[0m");
//! ```
//!
//! ## Attribute values
//!
//! Colors can be given as names (`"red"`, `"lightblue"`), palette indices
//! (`196`, `"196"`), hex strings (`"#ff8800"`), or RGB triples. Styles are
//! names (`"bold"`, `"underline"`, `"italic"`, ...). Values are **not**
//! checked when a preset is built; bad values are reported when codes are
//! rendered:
//!
//! ```rust
//! use ansi_presets::{Preset, PresetError};
//!
//! let oops = Preset::new().with_fore("not-a-color");
//! assert!(matches!(oops.codes(), Err(PresetError::InvalidColor { .. })));
//! ```
//!
//! ## Resolution
//!
//! Resolving a single axis first looks the value up verbatim in the static
//! [`CodeTable`]. Only values the table doesn't hold are handed to the
//! validating [`Colorizer`], which computes palette, hex, and RGB codes.
//!
//! ## Merging
//!
//! [`Preset::merge`] layers another preset and explicit [`Overrides`] on top
//! of a preset, returning a new one. Axes a layer doesn't set are kept from
//! below:
//!
//! ```rust
//! use ansi_presets::{Overrides, Preset};
//!
//! let base = Preset::new().with_fore("red").with_style("bold");
//! let merged = base.merge(
//!     &Preset::new().with_back("white"),
//!     &Overrides::new().with_style("underline"),
//! );
//! assert_eq!(
//!     merged,
//!     Preset::new().with_fore("red").with_back("white").with_style("underline"),
//! );
//! ```
//!
//! ## Preset sheets
//!
//! [`PresetSheet`] loads named presets, with aliases, from YAML or JSON.

pub mod axis;
pub mod codes;
pub mod colorize;
pub mod error;
pub mod preset;
pub mod sheet;
pub mod styled;
mod util;
pub mod value;

pub use axis::Axis;
pub use codes::{codes, CodeTable, StaticCodeTable, RESET};
pub use colorize::{AnsiColorizer, Colorizer, RgbMode};
pub use error::PresetError;
pub use preset::{AttributeSource, Attributes, Overrides, Preset};
pub use sheet::{PresetSheet, PresetValue, DEFAULT_MISSING_PRESET_INDICATOR};
pub use styled::Styled;
pub use util::{normalize_name, parse_hex, rgb_to_ansi256};
pub use value::AttrValue;
