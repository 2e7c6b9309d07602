//! Attribute views and per-call overrides.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::value::AttrValue;

/// The set slots of a preset, keyed by axis.
///
/// Absent slots never appear. Iteration always follows the axis order
/// `fore`, `back`, `style`, so serialized and debug output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<Axis, AttrValue>);

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value set for `axis`.
    pub fn get(&self, axis: Axis) -> Option<&AttrValue> {
        self.0.get(&axis)
    }

    /// Sets `axis` when `value` is present. Absent values never erase.
    pub fn set(&mut self, axis: Axis, value: Option<&AttrValue>) {
        if let Some(value) = value {
            self.0.insert(axis, value.clone());
        }
    }

    /// Overlays every set axis of `other` onto this one.
    pub fn update(&mut self, other: &Attributes) {
        for (axis, value) in other.iter() {
            self.0.insert(axis, value.clone());
        }
    }

    /// Iterates the set axes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &AttrValue)> {
        self.0.iter().map(|(axis, value)| (*axis, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Attributes {
    type Item = (Axis, AttrValue);
    type IntoIter = btree_map::IntoIter<Axis, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Explicit `fore`/`back`/`style` arguments for a single call or merge.
///
/// `None` means "keep the value from the layer below".
///
/// # Example
///
/// ```rust
/// use ansi_presets::{Overrides, Preset};
///
/// let warn = Preset::new().with_fore("red");
/// let once = warn.call_with("x", &Overrides::new().with_fore("blue")).unwrap();
/// assert_eq!(once.to_string(), "\x1b[34mx\x1b[0m");
/// assert_eq!(warn.call("y").unwrap().to_string(), "\x1b[31my\x1b[0m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Overrides {
    pub fore: Option<AttrValue>,
    pub back: Option<AttrValue>,
    pub style: Option<AttrValue>,
}

impl Overrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fore(mut self, value: impl Into<AttrValue>) -> Self {
        self.fore = Some(value.into());
        self
    }

    pub fn with_back(mut self, value: impl Into<AttrValue>) -> Self {
        self.back = Some(value.into());
        self
    }

    pub fn with_style(mut self, value: impl Into<AttrValue>) -> Self {
        self.style = Some(value.into());
        self
    }

    /// Returns the override for `axis`, if any.
    pub fn get(&self, axis: Axis) -> Option<&AttrValue> {
        match axis {
            Axis::Fore => self.fore.as_ref(),
            Axis::Back => self.back.as_ref(),
            Axis::Style => self.style.as_ref(),
        }
    }

    /// Returns true when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        Axis::ALL.iter().all(|axis| self.get(*axis).is_none())
    }
}

/// Anything that can supply a layer of attributes to a merge.
pub trait AttributeSource {
    /// The set attributes of this layer.
    fn as_dict(&self) -> Attributes;
}

impl AttributeSource for Attributes {
    fn as_dict(&self) -> Attributes {
        self.clone()
    }
}

impl AttributeSource for Overrides {
    fn as_dict(&self) -> Attributes {
        let mut attrs = Attributes::new();
        for axis in Axis::ALL {
            attrs.set(axis, self.get(axis));
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_never_erase() {
        let mut attrs = Attributes::new();
        attrs.set(Axis::Fore, Some(&AttrValue::from("red")));
        attrs.set(Axis::Fore, None);
        assert_eq!(attrs.get(Axis::Fore), Some(&AttrValue::from("red")));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_iteration_follows_axis_order() {
        let mut attrs = Attributes::new();
        attrs.set(Axis::Style, Some(&AttrValue::from("bold")));
        attrs.set(Axis::Fore, Some(&AttrValue::from("red")));
        attrs.set(Axis::Back, Some(&AttrValue::from("white")));
        let axes: Vec<Axis> = attrs.iter().map(|(axis, _)| axis).collect();
        assert_eq!(axes, vec![Axis::Fore, Axis::Back, Axis::Style]);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let attrs = Overrides::new()
            .with_style("bold")
            .with_fore(12u32)
            .as_dict();
        assert_eq!(
            serde_json::to_string(&attrs).unwrap(),
            r#"{"fore":12,"style":"bold"}"#
        );
    }

    #[test]
    fn test_update_overlays() {
        let mut base = Overrides::new().with_fore("red").with_back("white").as_dict();
        base.update(&Overrides::new().with_back("black").as_dict());
        assert_eq!(base.get(Axis::Fore), Some(&AttrValue::from("red")));
        assert_eq!(base.get(Axis::Back), Some(&AttrValue::from("black")));
    }

    #[test]
    fn test_overrides_empty() {
        assert!(Overrides::new().is_empty());
        assert!(!Overrides::new().with_style("dim").is_empty());
        assert!(Overrides::new().as_dict().is_empty());
    }
}
