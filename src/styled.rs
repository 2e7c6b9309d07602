//! Text wrapped in escape codes.

use std::fmt;

use crate::codes::RESET;

/// Text paired with the escape codes that style it.
///
/// Renders as `<codes><text><reset>`. When no codes apply the text is
/// rendered plain, without a reset.
///
/// # Example
///
/// ```rust
/// use ansi_presets::Preset;
///
/// let warn = Preset::new().with_fore("red").with_style("bold");
/// let styled = warn.call("Watch out!").unwrap();
/// assert_eq!(styled.to_string(), "\x1b[31m\x1b[1mWatch out!\x1b[0m");
/// assert_eq!(styled.stripped(), "Watch out!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Styled {
    codes: String,
    text: String,
}

impl Styled {
    /// Wraps `text` in already rendered `codes`.
    pub fn new(codes: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            codes: codes.into(),
            text: text.into(),
        }
    }

    /// Wraps `text` without any styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(String::new(), text)
    }

    /// The leading escape codes.
    pub fn codes(&self) -> &str {
        &self.codes
    }

    /// The wrapped text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true when no codes (and therefore no reset) are emitted.
    pub fn is_plain(&self) -> bool {
        self.codes.is_empty()
    }

    /// The rendered string with all escape codes removed.
    pub fn stripped(&self) -> String {
        console::strip_ansi_codes(&self.to_string()).into_owned()
    }

    /// Display width of the rendered string in terminal columns.
    pub fn width(&self) -> usize {
        console::measure_text_width(&self.to_string())
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            return f.write_str(&self.text);
        }
        write!(f, "{}{}{}", self.codes, self.text, RESET)
    }
}

impl From<Styled> for String {
    fn from(styled: Styled) -> Self {
        styled.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_reset() {
        let styled = Styled::plain("hi");
        assert!(styled.is_plain());
        assert_eq!(styled.to_string(), "hi");
    }

    #[test]
    fn test_codes_and_reset() {
        let styled = Styled::new("\x1b[31m", "hi");
        assert_eq!(styled.to_string(), "\x1b[31mhi\x1b[0m");
        assert_eq!(styled.codes(), "\x1b[31m");
        assert_eq!(styled.text(), "hi");
    }

    #[test]
    fn test_stripped_and_width() {
        let styled = Styled::new("\x1b[38;5;196m\x1b[1m", "日本");
        assert_eq!(styled.stripped(), "日本");
        assert_eq!(styled.width(), 4);
    }

    #[test]
    fn test_into_string() {
        let rendered: String = Styled::new("\x1b[4m", "x").into();
        assert_eq!(rendered, "\x1b[4mx\x1b[0m");
    }
}
