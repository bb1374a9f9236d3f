//! Layout blocks and the elements nested inside them.

use serde::Serialize;
use serde_json::Value;

use crate::decode;
use crate::error::DecodeError;
use crate::types::{TextSpan, TextValue};

/// One node inside a block: a button, an input control, an image, or a
/// wrapper around further elements.
///
/// Elements nest. A `context` or `rich_text_section` element carries child
/// elements of its own, and the children nest again to whatever depth the
/// input provides. Decoding follows the nesting without a depth ceiling and
/// keeps every list in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    /// Label or content, structured or bare, depending on the element type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<Element>>,
}

impl Element {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            element_type: decode::required_str(object, "type")?,
            action_id: decode::optional_str(object, "action_id")?,
            text: decode::optional_record(object, "text", TextValue::decode)?,
            elements: decode::optional_list(object, "elements", Self::decode)?,
        })
    }
}

/// One layout block of a view or a message.
///
/// Which of the optional members is present depends on `type`: `section`
/// blocks carry `text`, `actions` blocks carry `elements`, `input` blocks
/// carry `element` plus `label`. The shape stays permissive rather than
/// encoding those pairings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<Element>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextSpan>,
}

impl Block {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            block_id: decode::optional_str(object, "block_id")?,
            block_type: decode::required_str(object, "type")?,
            text: decode::optional_record(object, "text", TextSpan::decode)?,
            elements: decode::optional_list(object, "elements", Element::decode)?,
            element: decode::optional_record(object, "element", Element::decode)?,
            label: decode::optional_record(object, "label", TextSpan::decode)?,
        })
    }
}
