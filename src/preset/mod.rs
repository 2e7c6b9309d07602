//! Presets: reusable fore/back/style bundles.
//!
//! - [`Preset`]: the value type, callable on text
//! - [`Attributes`]: the set slots of a preset, in axis order
//! - [`Overrides`]: explicit per-call or per-merge axis values
//! - [`AttributeSource`]: any layer that can take part in a merge

mod attributes;
#[allow(clippy::module_inception)]
mod preset;

pub use attributes::{AttributeSource, Attributes, Overrides};
pub use preset::Preset;
