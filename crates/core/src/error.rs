//! Decode errors with field-path-qualified locations.
//!
//! Every failure produced while validating an interaction payload carries a
//! [`FieldPath`] locating the offending value inside the original JSON input,
//! e.g. `view.blocks[2].elements[0].type`. Paths are assembled bottom-up: a
//! nested record reports the failure relative to itself, and each enclosing
//! frame prefixes its own field or index segment while the error propagates
//! out of the recursive descent.

use core::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::types::InteractionKind;

/// One step of a [`FieldPath`]: an object field or an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// A named object field. Wire identifiers are fixed, so these are static.
    Field(&'static str),
    /// A zero-based position inside a JSON array.
    Index(usize),
}

/// Location of a validation failure inside the decoded JSON tree.
///
/// Renders in the dotted/bracketed form used throughout this crate's error
/// messages, e.g. `view.blocks[2].elements[0].type`. The empty path (the
/// payload root itself) renders as `payload`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The payload root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// A path consisting of a single field segment.
    #[must_use]
    pub fn field(name: &'static str) -> Self {
        Self(vec![PathSegment::Field(name)])
    }

    /// Whether this path points at the payload root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments in order, from the root to the failure point.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("payload");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// The JSON type of a value, for expected-versus-found reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl ValueKind {
    /// Classify a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "an object",
            Self::Array => "an array",
            Self::String => "a string",
            Self::Number => "a number",
            Self::Bool => "a boolean",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// Why an interaction payload was rejected.
///
/// The first failure anywhere in the recursive descent aborts the whole
/// decode and surfaces as one of these, carrying the complete path from the
/// payload root to the failing value. The message is safe to echo back in a
/// client-error response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The top-level `type` field is missing or not one of the five known
    /// interaction literals.
    #[error("{}, expected one of: {}", discriminator_found(.found), InteractionKind::WIRE_NAMES.join(", "))]
    UnrecognizedDiscriminator {
        /// What the `type` field held, if anything. Non-string values are
        /// echoed as compact JSON.
        found: Option<String>,
    },

    /// A required field is absent.
    #[error("{path}: missing required field")]
    MissingRequiredField {
        /// Where the field was expected.
        path: FieldPath,
    },

    /// A field is present but has the wrong JSON shape.
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Where the mismatched value sits.
        path: FieldPath,
        /// What the schema wanted, e.g. `a string` or `an integer`.
        expected: &'static str,
        /// What the input actually held.
        found: ValueKind,
    },

    /// A string field is present but not a member of its closed set.
    #[error("{path}: invalid value {value:?}, expected one of: {}", .allowed.join(", "))]
    InvalidEnumValue {
        /// Where the value sits.
        path: FieldPath,
        /// The rejected input string.
        value: String,
        /// The full set of accepted literals.
        allowed: &'static [&'static str],
    },
}

impl DecodeError {
    /// The location of the failure, for every variant that is
    /// field-addressed. Discriminator failures concern the payload root and
    /// carry no path.
    #[must_use]
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::UnrecognizedDiscriminator { .. } => None,
            Self::MissingRequiredField { path }
            | Self::TypeMismatch { path, .. }
            | Self::InvalidEnumValue { path, .. } => Some(path),
        }
    }

    /// Record that the failure occurred inside field `name` of an enclosing
    /// object.
    #[must_use]
    pub(crate) fn at(mut self, name: &'static str) -> Self {
        self.prepend(PathSegment::Field(name));
        self
    }

    /// Record that the failure occurred inside element `index` of an
    /// enclosing array.
    #[must_use]
    pub(crate) fn at_index(mut self, index: usize) -> Self {
        self.prepend(PathSegment::Index(index));
        self
    }

    fn prepend(&mut self, segment: PathSegment) {
        match self {
            // Discriminator failures always concern the payload root.
            Self::UnrecognizedDiscriminator { .. } => {}
            Self::MissingRequiredField { path }
            | Self::TypeMismatch { path, .. }
            | Self::InvalidEnumValue { path, .. } => path.prepend(segment),
        }
    }
}

fn discriminator_found(found: &Option<String>) -> String {
    found.as_ref().map_or_else(
        || "missing interaction type".to_owned(),
        |value| format!("unrecognized interaction type {value:?}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_path() -> FieldPath {
        let mut path = FieldPath::field("type");
        path.prepend(PathSegment::Index(0));
        path.prepend(PathSegment::Field("elements"));
        path.prepend(PathSegment::Index(2));
        path.prepend(PathSegment::Field("blocks"));
        path.prepend(PathSegment::Field("view"));
        path
    }

    #[test]
    fn test_root_path_display() {
        assert_eq!(FieldPath::root().to_string(), "payload");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn test_single_field_path_display() {
        assert_eq!(FieldPath::field("view").to_string(), "view");
    }

    #[test]
    fn test_nested_path_display() {
        assert_eq!(nested_path().to_string(), "view.blocks[2].elements[0].type");
    }

    #[test]
    fn test_error_at_prefixes_outermost_segment() {
        let err = DecodeError::MissingRequiredField {
            path: FieldPath::field("text"),
        };
        let wrapped = err.at_index(1).at("actions");
        assert_eq!(wrapped.to_string(), "actions[1].text: missing required field");
    }

    #[test]
    fn test_discriminator_errors_keep_no_path() {
        let err = DecodeError::UnrecognizedDiscriminator { found: None };
        let wrapped = err.at("view");
        assert!(wrapped.path().is_none());
        assert!(wrapped.to_string().starts_with("missing interaction type"));
    }

    #[test]
    fn test_unrecognized_discriminator_lists_literals() {
        let err = DecodeError::UnrecognizedDiscriminator {
            found: Some("not_a_real_kind".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "unrecognized interaction type \"not_a_real_kind\", expected one of: \
             block_actions, interactive_message, view_submission, shortcut, message_action"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = DecodeError::TypeMismatch {
            path: FieldPath::field("attachment_id"),
            expected: "an integer",
            found: ValueKind::String,
        };
        assert_eq!(
            err.to_string(),
            "attachment_id: expected an integer, found a string"
        );
    }

    #[test]
    fn test_invalid_enum_value_display() {
        let err = DecodeError::InvalidEnumValue {
            path: FieldPath::field("type"),
            value: "bold".to_owned(),
            allowed: &["plain_text", "mrkdwn"],
        };
        assert_eq!(
            err.to_string(),
            "type: invalid value \"bold\", expected one of: plain_text, mrkdwn"
        );
    }

    #[test]
    fn test_value_kind_classification() {
        use serde_json::json;

        assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!("s")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!(7)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Bool);
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
    }
}
