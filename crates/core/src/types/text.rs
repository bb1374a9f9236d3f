//! Text objects: structured spans and the span-or-plain-string union.

use serde::Serialize;
use serde_json::Value;

use crate::decode;
use crate::error::{DecodeError, FieldPath, ValueKind};
use crate::types::TextKind;

/// A rendered text object, e.g. a button label or a section body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    /// Whether the content is plain text or Slack-flavored markdown.
    #[serde(rename = "type")]
    pub text_type: TextKind,
    /// The content itself.
    pub text: String,
    /// Whether emoji shortcodes are rendered (plain text only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
    /// Whether markdown auto-formatting is suppressed (mrkdwn only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbatim: Option<bool>,
}

impl TextSpan {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        let raw_type = decode::required_str(object, "type")?;
        let text_type = TextKind::from_wire(&raw_type).map_err(|err| err.at("type"))?;
        Ok(Self {
            text_type,
            text: decode::required_str(object, "text")?,
            emoji: decode::optional_bool(object, "emoji")?,
            verbatim: decode::optional_bool(object, "verbatim")?,
        })
    }
}

/// A field the platform sends either as a structured [`TextSpan`] or as a
/// bare string (view titles and some element labels do both).
///
/// Resolution is by JSON type, never by content: an object must validate as
/// a full span (its failures propagate), a string becomes [`Plain`], and
/// absent/`null` is the surrounding `Option`'s `None`.
///
/// [`Plain`]: TextValue::Plain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextValue {
    /// A structured text object.
    Span(TextSpan),
    /// A bare string.
    Plain(String),
}

impl TextValue {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(_) => TextSpan::decode(value).map(Self::Span),
            Value::String(text) => Ok(Self::Plain(text.clone())),
            other => Err(DecodeError::TypeMismatch {
                path: FieldPath::root(),
                expected: "an object or a string",
                found: ValueKind::of(other),
            }),
        }
    }

    /// The text content regardless of representation.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Span(span) => &span.text,
            Self::Plain(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_full_span() {
        let span = TextSpan::decode(&json!({
            "type": "plain_text",
            "text": "Approve",
            "emoji": true
        }))
        .unwrap();
        assert_eq!(span.text_type, TextKind::PlainText);
        assert_eq!(span.text, "Approve");
        assert_eq!(span.emoji, Some(true));
        assert_eq!(span.verbatim, None);
    }

    #[test]
    fn test_decode_minimal_mrkdwn_span() {
        let span = TextSpan::decode(&json!({"type": "mrkdwn", "text": "*bold*"})).unwrap();
        assert_eq!(span.text_type, TextKind::Mrkdwn);
        assert_eq!(span.verbatim, None);
    }

    #[test]
    fn test_span_rejects_unknown_type() {
        let err = TextSpan::decode(&json!({"type": "bold", "text": "hi"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type: invalid value \"bold\", expected one of: plain_text, mrkdwn"
        );
    }

    #[test]
    fn test_span_requires_text() {
        let err = TextSpan::decode(&json!({"type": "plain_text"})).unwrap_err();
        assert_eq!(err.to_string(), "text: missing required field");
    }

    #[test]
    fn test_span_rejects_non_boolean_emoji() {
        let err = TextSpan::decode(&json!({
            "type": "plain_text",
            "text": "hi",
            "emoji": "yes"
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "emoji: expected a boolean, found a string");
    }

    #[test]
    fn test_text_value_prefers_structured_span() {
        let value = TextValue::decode(&json!({"type": "plain_text", "text": "Title"})).unwrap();
        assert!(matches!(value, TextValue::Span(ref span) if span.text == "Title"));
        assert_eq!(value.as_text(), "Title");
    }

    #[test]
    fn test_text_value_falls_back_to_plain_string() {
        let value = TextValue::decode(&json!("Just a title")).unwrap();
        assert_eq!(value, TextValue::Plain("Just a title".to_owned()));
        assert_eq!(value.as_text(), "Just a title");
    }

    #[test]
    fn test_text_value_object_failures_propagate() {
        // A malformed object is not silently reinterpreted as a string.
        let err = TextValue::decode(&json!({"type": "plain_text"})).unwrap_err();
        assert_eq!(err.to_string(), "text: missing required field");
    }

    #[test]
    fn test_text_value_rejects_other_shapes() {
        let err = TextValue::decode(&json!(42)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "payload: expected an object or a string, found a number"
        );
    }

    #[test]
    fn test_span_serializes_without_absent_fields() {
        let span = TextSpan::decode(&json!({"type": "plain_text", "text": "Close"})).unwrap();
        assert_eq!(
            serde_json::to_value(&span).unwrap(),
            json!({"type": "plain_text", "text": "Close"})
        );
    }

    #[test]
    fn test_plain_text_value_serializes_as_bare_string() {
        let value = TextValue::Plain("Title".to_owned());
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("Title"));
    }
}
