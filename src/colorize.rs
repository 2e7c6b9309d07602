//! Validating renderer for axis values.
//!
//! The [`Colorizer`] is the slow, strict path: it accepts everything the
//! static [`CodeTable`](crate::CodeTable) knows plus calculated forms, and
//! rejects whatever it cannot encode.
//!
//! Accepted forms for `fore` and `back`:
//!
//! - color names, matched leniently (`"Light Red"`, `"light_red"`)
//! - palette indices `0..=255`, as integers or numeric strings
//! - hex strings (`"#ff8800"`, `"f80"`) and RGB triples
//!
//! `style` accepts style names only.

use tracing::trace;

use crate::axis::Axis;
use crate::codes::{codes, indexed, truecolor, StaticCodeTable};
use crate::error::PresetError;
use crate::util::{parse_hex, rgb_to_ansi256};
use crate::value::AttrValue;

/// Validates axis values and renders their escape sequence.
pub trait Colorizer: Send + Sync {
    /// Renders the concatenated codes for the given axes, in order
    /// `fore`, `back`, `style`. Absent axes contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::InvalidColor`] for a bad `fore`/`back` value and
    /// [`PresetError::InvalidStyle`] for a bad `style` value.
    fn render(
        &self,
        fore: Option<&AttrValue>,
        back: Option<&AttrValue>,
        style: Option<&AttrValue>,
    ) -> Result<String, PresetError>;
}

/// How RGB values are encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RgbMode {
    /// 24-bit `38;2;r;g;b` codes.
    #[default]
    TrueColor,
    /// Nearest 256-color palette index.
    Ansi256,
}

/// The built-in [`Colorizer`] backed by the static code table.
///
/// # Example
///
/// ```rust
/// use ansi_presets::{AnsiColorizer, AttrValue, Colorizer, RgbMode};
///
/// let colorizer = AnsiColorizer::new();
/// let red = AttrValue::from("red");
/// assert_eq!(colorizer.render(Some(&red), None, None).unwrap(), "\x1b[31m");
///
/// let orange = AttrValue::from("#ff8800");
/// let codes = AnsiColorizer::with_rgb_mode(RgbMode::Ansi256)
///     .render(Some(&orange), None, None)
///     .unwrap();
/// assert_eq!(codes, "\x1b[38;5;208m");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AnsiColorizer {
    table: &'static StaticCodeTable,
    rgb_mode: RgbMode,
}

impl AnsiColorizer {
    /// Creates a colorizer that emits true-color codes for RGB values.
    pub fn new() -> Self {
        Self::with_rgb_mode(RgbMode::default())
    }

    /// Creates a colorizer with an explicit RGB encoding.
    pub fn with_rgb_mode(rgb_mode: RgbMode) -> Self {
        Self {
            table: codes(),
            rgb_mode,
        }
    }

    /// Returns the RGB encoding in use.
    pub fn rgb_mode(&self) -> RgbMode {
        self.rgb_mode
    }

    fn color_code(&self, axis: Axis, value: &AttrValue) -> Result<String, PresetError> {
        let invalid = || PresetError::InvalidColor {
            axis,
            value: value.to_string(),
        };
        match value {
            AttrValue::Name(name) => {
                if let Some(code) = self.table.find_name(axis, name) {
                    return Ok(code.to_string());
                }
                let trimmed = name.trim();
                if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    let index = trimmed.parse::<u8>().map_err(|_| invalid())?;
                    return Ok(indexed(axis, index));
                }
                let rgb = parse_hex(trimmed).ok_or_else(invalid)?;
                trace!(%axis, value = %name, "calculated hex color");
                Ok(self.rgb_code(axis, rgb))
            }
            AttrValue::Number(n) => {
                let index = u8::try_from(*n).map_err(|_| invalid())?;
                Ok(indexed(axis, index))
            }
            AttrValue::Rgb(r, g, b) => Ok(self.rgb_code(axis, (*r, *g, *b))),
        }
    }

    fn style_code(&self, value: &AttrValue) -> Result<String, PresetError> {
        value
            .as_name()
            .and_then(|name| self.table.find_name(Axis::Style, name))
            .map(str::to_string)
            .ok_or_else(|| PresetError::InvalidStyle {
                value: value.to_string(),
            })
    }

    fn rgb_code(&self, axis: Axis, rgb: (u8, u8, u8)) -> String {
        match self.rgb_mode {
            RgbMode::TrueColor => truecolor(axis, rgb),
            RgbMode::Ansi256 => indexed(axis, rgb_to_ansi256(rgb)),
        }
    }
}

impl Default for AnsiColorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Colorizer for AnsiColorizer {
    fn render(
        &self,
        fore: Option<&AttrValue>,
        back: Option<&AttrValue>,
        style: Option<&AttrValue>,
    ) -> Result<String, PresetError> {
        let mut out = String::new();
        if let Some(value) = fore {
            out.push_str(&self.color_code(Axis::Fore, value)?);
        }
        if let Some(value) = back {
            out.push_str(&self.color_code(Axis::Back, value)?);
        }
        if let Some(value) = style {
            out.push_str(&self.style_code(value)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_fore(value: AttrValue) -> Result<String, PresetError> {
        AnsiColorizer::new().render(Some(&value), None, None)
    }

    #[test]
    fn test_render_axis_order() {
        let codes = AnsiColorizer::new()
            .render(
                Some(&"red".into()),
                Some(&"white".into()),
                Some(&"bold".into()),
            )
            .unwrap();
        assert_eq!(codes, "\x1b[31m\x1b[47m\x1b[1m");
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(AnsiColorizer::new().render(None, None, None).unwrap(), "");
    }

    #[test]
    fn test_names_are_lenient() {
        assert_eq!(render_fore("RED".into()).unwrap(), "\x1b[31m");
        assert_eq!(render_fore("light_red".into()).unwrap(), "\x1b[91m");
    }

    #[test]
    fn test_indexed_colors() {
        assert_eq!(render_fore(AttrValue::Number(196)).unwrap(), "\x1b[38;5;196m");
        assert_eq!(render_fore(" 12 ".into()).unwrap(), "\x1b[38;5;12m");
        let back = AnsiColorizer::new()
            .render(None, Some(&AttrValue::Number(3)), None)
            .unwrap();
        assert_eq!(back, "\x1b[48;5;3m");
    }

    #[test]
    fn test_index_out_of_range() {
        let err = render_fore(AttrValue::Number(256)).unwrap_err();
        assert!(matches!(err, PresetError::InvalidColor { axis: Axis::Fore, .. }));
        assert!(render_fore("300".into()).is_err());
    }

    #[test]
    fn test_malformed_numbers_are_invalid() {
        for bad in ["-1", "+5", "2_5_5", "1-2"] {
            let err = render_fore(bad.into()).unwrap_err();
            assert_eq!(
                err,
                PresetError::InvalidColor {
                    axis: Axis::Fore,
                    value: bad.to_string(),
                }
            );
            let back = AnsiColorizer::new().render(None, Some(&bad.into()), None);
            assert!(matches!(back, Err(PresetError::InvalidColor { axis: Axis::Back, .. })));
        }
    }

    #[test]
    fn test_rgb_true_color() {
        assert_eq!(
            render_fore(AttrValue::Rgb(255, 136, 0)).unwrap(),
            "\x1b[38;2;255;136;0m"
        );
        assert_eq!(render_fore("#ff8800".into()).unwrap(), "\x1b[38;2;255;136;0m");
    }

    #[test]
    fn test_rgb_ansi256_mode() {
        let colorizer = AnsiColorizer::with_rgb_mode(RgbMode::Ansi256);
        assert_eq!(colorizer.rgb_mode(), RgbMode::Ansi256);
        let codes = colorizer
            .render(None, Some(&AttrValue::Rgb(255, 0, 0)), None)
            .unwrap();
        assert_eq!(codes, "\x1b[48;5;196m");
    }

    #[test]
    fn test_invalid_color_names_axis() {
        let err = AnsiColorizer::new()
            .render(None, Some(&"not-a-color".into()), None)
            .unwrap_err();
        assert_eq!(
            err,
            PresetError::InvalidColor {
                axis: Axis::Back,
                value: "not-a-color".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_style() {
        let colorizer = AnsiColorizer::new();
        for bad in [AttrValue::from("red"), AttrValue::Number(1), AttrValue::Rgb(1, 1, 1)] {
            let err = colorizer.render(None, None, Some(&bad)).unwrap_err();
            assert!(matches!(err, PresetError::InvalidStyle { .. }));
        }
        assert_eq!(
            colorizer.render(None, None, Some(&"Underline".into())).unwrap(),
            "\x1b[4m"
        );
    }

    #[test]
    fn test_first_error_wins() {
        let err = AnsiColorizer::new()
            .render(Some(&"nope".into()), None, Some(&"nope".into()))
            .unwrap_err();
        assert!(matches!(err, PresetError::InvalidColor { .. }));
    }
}
