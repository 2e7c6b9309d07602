//! The preset value type.

use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::attributes::{AttributeSource, Attributes, Overrides};
use crate::axis::Axis;
use crate::codes::{codes, CodeTable};
use crate::colorize::{AnsiColorizer, Colorizer};
use crate::error::PresetError;
use crate::styled::Styled;
use crate::value::AttrValue;

/// A reusable bundle of foreground, background, and style values.
///
/// Calling a preset wraps text in the matching escape codes. Presets never
/// validate on construction; bad values surface when codes are rendered.
///
/// Equality, ordering, and hashing follow the `(fore, back, style)` triple,
/// with an absent slot ordering before any set one. Presets can therefore be
/// sorted or used as map keys.
///
/// # Example
///
/// ```rust
/// use ansi_presets::{Overrides, Preset};
///
/// let warn = Preset::new().with_fore("red").with_back("white").with_style("bold");
/// println!("{}", warn.call("Watch out!").unwrap());
///
/// // "warning, but underlined"
/// let loud = warn.merge(&Preset::new(), &Overrides::new().with_style("underline"));
/// assert_eq!(loud.style().unwrap().to_string(), "underline");
/// assert_eq!(warn.style().unwrap().to_string(), "bold");
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    #[serde(skip_serializing_if = "Option::is_none")]
    fore: Option<AttrValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    back: Option<AttrValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<AttrValue>,
}

impl Preset {
    /// Creates a preset with no attributes. Calling it returns text unstyled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a preset from explicit slot values.
    pub fn from_parts(
        fore: Option<AttrValue>,
        back: Option<AttrValue>,
        style: Option<AttrValue>,
    ) -> Self {
        Self { fore, back, style }
    }

    /// Returns a copy with the foreground set.
    #[must_use]
    pub fn with_fore(&self, value: impl Into<AttrValue>) -> Self {
        Self {
            fore: Some(value.into()),
            ..self.clone()
        }
    }

    /// Returns a copy with the background set.
    #[must_use]
    pub fn with_back(&self, value: impl Into<AttrValue>) -> Self {
        Self {
            back: Some(value.into()),
            ..self.clone()
        }
    }

    /// Returns a copy with the style set.
    #[must_use]
    pub fn with_style(&self, value: impl Into<AttrValue>) -> Self {
        Self {
            style: Some(value.into()),
            ..self.clone()
        }
    }

    pub fn fore(&self) -> Option<&AttrValue> {
        self.fore.as_ref()
    }

    pub fn back(&self) -> Option<&AttrValue> {
        self.back.as_ref()
    }

    pub fn style(&self) -> Option<&AttrValue> {
        self.style.as_ref()
    }

    /// Returns the slot for `axis`.
    pub fn get(&self, axis: Axis) -> Option<&AttrValue> {
        match axis {
            Axis::Fore => self.fore.as_ref(),
            Axis::Back => self.back.as_ref(),
            Axis::Style => self.style.as_ref(),
        }
    }

    /// Returns true when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.fore.is_none() && self.back.is_none() && self.style.is_none()
    }

    /// The set slots, in order `fore`, `back`, `style`.
    pub fn as_dict(&self) -> Attributes {
        let mut attrs = Attributes::new();
        for axis in Axis::ALL {
            attrs.set(axis, self.get(axis));
        }
        attrs
    }

    /// Compares against a value of any type.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::TypeMismatch`] when `other` is not a `Preset`.
    pub fn equals<T: Any>(&self, other: &T) -> Result<bool, PresetError> {
        Ok(self == expect_preset(other)?)
    }

    /// Orders against a value of any type.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::TypeMismatch`] when `other` is not a `Preset`.
    pub fn compare<T: Any>(&self, other: &T) -> Result<Ordering, PresetError> {
        Ok(self.cmp(expect_preset(other)?))
    }

    /// Wraps `text` in this preset's codes.
    ///
    /// # Errors
    ///
    /// Propagates [`PresetError::InvalidColor`] or [`PresetError::InvalidStyle`]
    /// for values the colorizer rejects.
    pub fn call(&self, text: &str) -> Result<Styled, PresetError> {
        self.call_with(text, &Overrides::new())
    }

    /// Wraps `text`, replacing any axis given in `overrides` for this call only.
    pub fn call_with(&self, text: &str, overrides: &Overrides) -> Result<Styled, PresetError> {
        self.call_using(text, overrides, &AnsiColorizer::default())
    }

    /// Like [`Preset::call_with`], rendering through an explicit colorizer.
    pub fn call_using(
        &self,
        text: &str,
        overrides: &Overrides,
        colorizer: &dyn Colorizer,
    ) -> Result<Styled, PresetError> {
        let codes = colorizer.render(
            overrides.fore.as_ref().or(self.fore.as_ref()),
            overrides.back.as_ref().or(self.back.as_ref()),
            overrides.style.as_ref().or(self.style.as_ref()),
        )?;
        Ok(Styled::new(codes, text))
    }

    /// Resolves the escape code for the axis named `axis`.
    ///
    /// Returns `default` when the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::BadAxisName`] for names other than `fore`,
    /// `back`, or `style`, and propagates colorizer validation errors.
    pub fn code(&self, axis: &str, default: Option<&str>) -> Result<Option<String>, PresetError> {
        self.axis_code(axis.parse()?, default)
    }

    /// Resolves the escape code for `axis`, or `default` when it is absent.
    pub fn axis_code(&self, axis: Axis, default: Option<&str>) -> Result<Option<String>, PresetError> {
        self.axis_code_using(axis, default, codes(), &AnsiColorizer::default())
    }

    /// Resolves one axis through an explicit table and colorizer.
    ///
    /// An exact table hit is returned as-is without validation. Anything else
    /// is rendered by the colorizer with only this axis set.
    pub fn axis_code_using(
        &self,
        axis: Axis,
        default: Option<&str>,
        table: &dyn CodeTable,
        colorizer: &dyn Colorizer,
    ) -> Result<Option<String>, PresetError> {
        let Some(value) = self.get(axis) else {
            return Ok(default.map(str::to_string));
        };
        if let Some(code) = value.as_name().and_then(|name| table.lookup(axis, name)) {
            return Ok(Some(code.to_string()));
        }
        trace!(%axis, %value, "code table miss, delegating to colorizer");
        let code = match axis {
            Axis::Fore => colorizer.render(Some(value), None, None)?,
            Axis::Back => colorizer.render(None, Some(value), None)?,
            Axis::Style => colorizer.render(None, None, Some(value))?,
        };
        Ok(Some(code))
    }

    /// All escape codes needed for this preset, in order `fore`, `back`, `style`.
    ///
    /// Empty presets produce an empty string.
    ///
    /// # Errors
    ///
    /// The first invalid value aborts the whole resolution.
    pub fn codes(&self) -> Result<String, PresetError> {
        self.codes_using(codes(), &AnsiColorizer::default())
    }

    /// Like [`Preset::codes`], through an explicit table and colorizer.
    pub fn codes_using(
        &self,
        table: &dyn CodeTable,
        colorizer: &dyn Colorizer,
    ) -> Result<String, PresetError> {
        let mut out = String::new();
        for axis in Axis::ALL {
            if let Some(code) = self.axis_code_using(axis, None, table, colorizer)? {
                out.push_str(&code);
            }
        }
        Ok(out)
    }

    /// Returns a new preset layering `other` and then `overrides` over this one.
    ///
    /// Each layer only replaces the axes it sets. Neither input changes.
    #[must_use]
    pub fn merge(&self, other: &impl AttributeSource, overrides: &Overrides) -> Self {
        let mut attrs = self.as_dict();
        attrs.update(&other.as_dict());
        attrs.update(&overrides.as_dict());
        Self::from(attrs)
    }
}

fn expect_preset<T: Any>(other: &T) -> Result<&Preset, PresetError> {
    (other as &dyn Any)
        .downcast_ref::<Preset>()
        .ok_or(PresetError::TypeMismatch {
            expected: "Preset",
            found: type_name::<T>(),
        })
}

impl AttributeSource for Preset {
    fn as_dict(&self) -> Attributes {
        Preset::as_dict(self)
    }
}

impl From<Attributes> for Preset {
    fn from(attrs: Attributes) -> Self {
        let mut preset = Preset::new();
        for (axis, value) in attrs {
            match axis {
                Axis::Fore => preset.fore = Some(value),
                Axis::Back => preset.back = Some(value),
                Axis::Style => preset.style = Some(value),
            }
        }
        preset
    }
}

impl From<Overrides> for Preset {
    fn from(overrides: Overrides) -> Self {
        Self::from_parts(overrides.fore, overrides.back, overrides.style)
    }
}

struct SlotRepr<'a>(Option<&'a AttrValue>);

impl fmt::Debug for SlotRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("None"),
            Some(AttrValue::Name(name)) => write!(f, "{:?}", name),
            Some(AttrValue::Number(n)) => write!(f, "{}", n),
            Some(AttrValue::Rgb(r, g, b)) => write!(f, "({}, {}, {})", r, g, b),
        }
    }
}

impl fmt::Debug for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Preset(fore={:?}, back={:?}, style={:?})",
            SlotRepr(self.fore()),
            SlotRepr(self.back()),
            SlotRepr(self.style()),
        )
    }
}
