//! The action records describing which control a user operated.

use serde::Serialize;
use serde_json::Value;

use crate::decode;
use crate::error::DecodeError;
use crate::types::TextSpan;

/// One control the user operated, e.g. a button press or a menu selection.
///
/// Interactions can report several actions at once, so payloads carry a list
/// of these even though a single entry is the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    pub block_id: String,
    /// Label of the control as rendered to the user.
    pub text: TextSpan,
    pub value: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub action_ts: String,
}

impl Action {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            action_id: decode::optional_str(object, "action_id")?,
            block_id: decode::required_str(object, "block_id")?,
            text: decode::required_record(object, "text", TextSpan::decode)?,
            value: decode::required_str(object, "value")?,
            action_type: decode::required_str(object, "type")?,
            action_ts: decode::required_str(object, "action_ts")?,
        })
    }
}
