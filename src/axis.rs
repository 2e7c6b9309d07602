//! The three styling axes a preset can set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PresetError;

/// One of the three style dimensions: foreground, background, or text style.
///
/// The declaration order is the canonical axis order used everywhere codes
/// are concatenated or attributes are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Foreground color.
    Fore,
    /// Background color.
    Back,
    /// Text style (bold, underline, ...).
    Style,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::Fore, Axis::Back, Axis::Style];

    /// Returns the lowercase name of this axis.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Fore => "fore",
            Axis::Back => "back",
            Axis::Style => "style",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fore" => Ok(Axis::Fore),
            "back" => Ok(Axis::Back),
            "style" => Ok(Axis::Style),
            _ => Err(PresetError::BadAxisName {
                name: s.to_string(),
            }),
        }
    }
}
