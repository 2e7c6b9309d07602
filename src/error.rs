//! Error types for preset resolution and preset sheets.

use thiserror::Error;

use crate::axis::Axis;

/// Error returned when a preset cannot be compared, resolved, or loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// A dynamic comparison was given something other than a preset.
    #[error("expecting a {expected} instance, got: {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An axis name outside of `fore`, `back`, and `style`.
    #[error("expecting 'fore', 'back', or 'style', got: {name:?}")]
    BadAxisName { name: String },

    /// A foreground or background value that is not a known name, index, or RGB form.
    #[error("invalid {axis} color: {value}")]
    InvalidColor { axis: Axis, value: String },

    /// A style value that is not a known style name.
    #[error("invalid style: {value}")]
    InvalidStyle { value: String },

    /// A preset sheet has no entry with this name.
    #[error("no preset named '{name}'")]
    UnknownPreset { name: String },

    /// A sheet alias references a preset that doesn't exist
    #[error("preset '{from}' aliases non-existent preset '{to}'")]
    UnresolvedAlias { from: String, to: String },

    /// A cycle was detected in sheet alias resolution
    #[error("cycle detected in preset aliases: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// A preset sheet could not be deserialized.
    #[error("failed to parse preset sheet: {message}")]
    Parse { message: String },
}

impl From<serde_yaml::Error> for PresetError {
    fn from(err: serde_yaml::Error) -> Self {
        PresetError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        PresetError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_error_display() {
        let err = PresetError::UnresolvedAlias {
            from: "orphan".to_string(),
            to: "missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("orphan"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_cycle_detected_error_display() {
        let err = PresetError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("a -> b -> a"));
    }

    #[test]
    fn test_invalid_color_display_names_axis() {
        let err = PresetError::InvalidColor {
            axis: Axis::Back,
            value: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "invalid back color: nope");
    }

    #[test]
    fn test_bad_axis_display_quotes_name() {
        let err = PresetError::BadAxisName {
            name: "side".to_string(),
        };
        assert!(err.to_string().contains("\"side\""));
    }
}
