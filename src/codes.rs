//! The static escape-code table.
//!
//! [`CodeTable`] is the fast lookup from a symbolic name or numeric string to
//! a raw escape fragment. Lookups never fail: unknown values come back as
//! `None` so callers can fall back to the [`Colorizer`](crate::Colorizer).
//!
//! The built-in table ([`codes()`]) holds:
//!
//! | Axis    | Keys                                                     |
//! |---------|----------------------------------------------------------|
//! | `fore`  | 8 basic names, `light*` variants, `grey`, `reset`, `"0"`..`"255"` |
//! | `back`  | same as `fore`, rendered as background codes             |
//! | `style` | `bold`, `dim`, `italic`, `underline`, ... and short aliases |

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::axis::Axis;
use crate::util::normalize_name;

/// Sequence that resets every attribute.
pub const RESET: &str = "\x1b[0m";

const BASIC_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

const STYLES: &[(&str, u8)] = &[
    ("reset_all", 0),
    ("bold", 1),
    ("b", 1),
    ("bright", 1),
    ("dim", 2),
    ("d", 2),
    ("italic", 3),
    ("i", 3),
    ("underline", 4),
    ("u", 4),
    ("flash", 5),
    ("f", 5),
    ("highlight", 7),
    ("h", 7),
    ("reverse", 7),
    ("strikethrough", 9),
    ("s", 9),
    ("underline2", 21),
    ("normal", 22),
    ("n", 22),
    ("frame", 51),
    ("encircle", 52),
    ("overline", 53),
];

/// Read-only lookup from axis values to raw escape fragments.
pub trait CodeTable: Send + Sync {
    /// Looks up `value` exactly as given. Returns `None` when absent.
    fn lookup(&self, axis: Axis, value: &str) -> Option<&str>;
}

/// Codes for one axis, keyed exactly and by normalized name.
#[derive(Debug, Clone, Default)]
struct Entries {
    exact: HashMap<String, String>,
    lenient: HashMap<String, String>,
}

impl Entries {
    fn insert(&mut self, key: String, code: String) {
        // Numeric keys stay exact-only so "-1" or "2_5_5" never normalize onto an index.
        if !key.bytes().all(|b| b.is_ascii_digit()) {
            self.lenient.insert(normalize_name(&key), code.clone());
        }
        self.exact.insert(key, code);
    }
}

/// The built-in table of named colors, palette indices, and styles.
#[derive(Debug, Clone)]
pub struct StaticCodeTable {
    fore: Entries,
    back: Entries,
    style: Entries,
}

impl StaticCodeTable {
    fn build() -> Self {
        let mut fore = Entries::default();
        let mut back = Entries::default();

        for (i, name) in BASIC_COLORS.iter().enumerate() {
            fore.insert(name.to_string(), sgr(30 + i));
            back.insert(name.to_string(), sgr(40 + i));
            fore.insert(format!("light{}", name), sgr(90 + i));
            back.insert(format!("light{}", name), sgr(100 + i));
        }
        for grey in ["grey", "gray"] {
            fore.insert(grey.to_string(), sgr(90));
            back.insert(grey.to_string(), sgr(100));
        }
        fore.insert("reset".to_string(), sgr(39));
        back.insert("reset".to_string(), sgr(49));

        for n in 0..=255u8 {
            fore.insert(n.to_string(), indexed(Axis::Fore, n));
            back.insert(n.to_string(), indexed(Axis::Back, n));
        }

        let mut style = Entries::default();
        for (name, code) in STYLES {
            style.insert(name.to_string(), sgr(usize::from(*code)));
        }

        Self { fore, back, style }
    }

    fn entries(&self, axis: Axis) -> &Entries {
        match axis {
            Axis::Fore => &self.fore,
            Axis::Back => &self.back,
            Axis::Style => &self.style,
        }
    }

    /// Looks up a name leniently: case, whitespace, `_` and `-` are ignored.
    ///
    /// Palette indices only match exactly; numeric strings are left to the
    /// colorizer's own parsing.
    pub fn find_name(&self, axis: Axis, name: &str) -> Option<&str> {
        if let Some(code) = self.lookup(axis, name) {
            return Some(code);
        }
        self.entries(axis)
            .lenient
            .get(&normalize_name(name))
            .map(|code| code.as_str())
    }
}

impl CodeTable for StaticCodeTable {
    fn lookup(&self, axis: Axis, value: &str) -> Option<&str> {
        self.entries(axis).exact.get(value).map(|code| code.as_str())
    }
}

static CODES: Lazy<StaticCodeTable> = Lazy::new(StaticCodeTable::build);

/// Returns the process-wide built-in code table.
pub fn codes() -> &'static StaticCodeTable {
    &CODES
}

/// Formats a single SGR parameter as an escape sequence.
pub(crate) fn sgr(code: usize) -> String {
    format!("\x1b[{}m", code)
}

/// Extended-color SGR lead: 48 for backgrounds, 38 otherwise.
fn color_lead(axis: Axis) -> u8 {
    if axis == Axis::Back {
        48
    } else {
        38
    }
}

/// Formats a 256-color palette code for a color axis.
pub(crate) fn indexed(axis: Axis, index: u8) -> String {
    format!("\x1b[{};5;{}m", color_lead(axis), index)
}

/// Formats a 24-bit RGB code for a color axis.
pub(crate) fn truecolor(axis: Axis, (r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[{};2;{};{};{}m", color_lead(axis), r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_colors() {
        let table = codes();
        assert_eq!(table.lookup(Axis::Fore, "red"), Some("\x1b[31m"));
        assert_eq!(table.lookup(Axis::Back, "white"), Some("\x1b[47m"));
        assert_eq!(table.lookup(Axis::Fore, "lightblue"), Some("\x1b[94m"));
        assert_eq!(table.lookup(Axis::Back, "lightblue"), Some("\x1b[104m"));
        assert_eq!(table.lookup(Axis::Fore, "grey"), Some("\x1b[90m"));
    }

    #[test]
    fn test_numeric_strings() {
        let table = codes();
        assert_eq!(table.lookup(Axis::Fore, "0"), Some("\x1b[38;5;0m"));
        assert_eq!(table.lookup(Axis::Back, "255"), Some("\x1b[48;5;255m"));
        assert_eq!(table.lookup(Axis::Fore, "256"), None);
    }

    #[test]
    fn test_styles() {
        let table = codes();
        assert_eq!(table.lookup(Axis::Style, "bold"), Some("\x1b[1m"));
        assert_eq!(table.lookup(Axis::Style, "normal"), Some("\x1b[22m"));
        assert_eq!(table.lookup(Axis::Style, "reset_all"), Some("\x1b[0m"));
        assert_eq!(table.lookup(Axis::Style, "red"), None);
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = codes();
        assert_eq!(table.lookup(Axis::Fore, "RED"), None);
        assert_eq!(table.lookup(Axis::Fore, "not-a-color"), None);
    }

    #[test]
    fn test_find_name_is_lenient() {
        let table = codes();
        assert_eq!(table.find_name(Axis::Fore, "RED"), Some("\x1b[31m"));
        assert_eq!(table.find_name(Axis::Fore, "Light Red"), Some("\x1b[91m"));
        assert_eq!(table.find_name(Axis::Style, "RESET-ALL"), Some("\x1b[0m"));
        assert_eq!(table.find_name(Axis::Style, "blink"), None);
    }

    #[test]
    fn test_find_name_keeps_indices_exact() {
        let table = codes();
        assert_eq!(table.find_name(Axis::Fore, "12"), Some("\x1b[38;5;12m"));
        for bad in ["-1", "+5", "2_5_5", "1-2", " 1 2 "] {
            assert_eq!(table.find_name(Axis::Fore, bad), None, "{:?}", bad);
            assert_eq!(table.find_name(Axis::Back, bad), None, "{:?}", bad);
        }
    }

    #[test]
    fn test_code_builders() {
        assert_eq!(indexed(Axis::Back, 9), "\x1b[48;5;9m");
        assert_eq!(truecolor(Axis::Fore, (1, 2, 3)), "\x1b[38;2;1;2;3m");
    }
}
