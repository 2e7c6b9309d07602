//! Attribute values held by preset slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value for one preset axis.
///
/// Values are accepted as-is; whether `"red"`, `"#ff8800"`, `196` or an RGB
/// triple is actually usable is only decided when a preset is rendered.
///
/// Different kinds order by kind first (`Name < Number < Rgb`), then by
/// their contents.
///
/// # Example
///
/// ```rust
/// use ansi_presets::AttrValue;
///
/// assert_eq!(AttrValue::from("red"), AttrValue::Name("red".into()));
/// assert_eq!(AttrValue::from(196u32), AttrValue::Number(196));
/// assert_eq!(AttrValue::from((255, 128, 0)), AttrValue::Rgb(255, 128, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A symbolic name, numeric string, or hex string.
    Name(String),
    /// An indexed color given as an integer.
    Number(u32),
    /// An RGB triple.
    Rgb(u8, u8, u8),
}

impl AttrValue {
    /// Returns the string form when this is a [`AttrValue::Name`].
    pub fn as_name(&self) -> Option<&str> {
        match self {
            AttrValue::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Name(name) => f.write_str(name),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Rgb(r, g, b) => write!(f, "({}, {}, {})", r, g, b),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(name: &str) -> Self {
        AttrValue::Name(name.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(name: String) -> Self {
        AttrValue::Name(name)
    }
}

impl From<&String> for AttrValue {
    fn from(name: &String) -> Self {
        AttrValue::Name(name.clone())
    }
}

impl From<u8> for AttrValue {
    fn from(n: u8) -> Self {
        AttrValue::Number(u32::from(n))
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n)
    }
}

impl From<(u8, u8, u8)> for AttrValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        AttrValue::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for AttrValue {
    fn from([r, g, b]: [u8; 3]) -> Self {
        AttrValue::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AttrValue::from("red").to_string(), "red");
        assert_eq!(AttrValue::Number(12).to_string(), "12");
        assert_eq!(AttrValue::Rgb(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    #[test]
    fn test_order_by_kind_then_value() {
        assert!(AttrValue::from("blue") < AttrValue::from("red"));
        assert!(AttrValue::from("zzz") < AttrValue::Number(0));
        assert!(AttrValue::Number(255) < AttrValue::Rgb(0, 0, 0));
        assert!(AttrValue::Rgb(0, 0, 1) < AttrValue::Rgb(0, 1, 0));
    }

    #[test]
    fn test_serde_untagged_forms() {
        let values: Vec<AttrValue> = serde_json::from_str(r#"["red", 12, [1, 2, 3]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                AttrValue::from("red"),
                AttrValue::Number(12),
                AttrValue::Rgb(1, 2, 3)
            ]
        );
        assert_eq!(
            serde_json::to_string(&AttrValue::Rgb(4, 5, 6)).unwrap(),
            "[4,5,6]"
        );
    }

    #[test]
    fn test_as_name() {
        assert_eq!(AttrValue::from("bold").as_name(), Some("bold"));
        assert_eq!(AttrValue::Number(1).as_name(), None);
    }
}
