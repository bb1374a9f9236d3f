//! Workspace, user, channel, and message records shared across payload kinds.

use serde::Serialize;
use serde_json::Value;

use crate::decode;
use crate::error::DecodeError;

/// The workspace an interaction originated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: String,
    pub domain: String,
}

impl Team {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            id: decode::required_str(object, "id")?,
            domain: decode::required_str(object, "domain")?,
        })
    }
}

/// The member who triggered the interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl User {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            id: decode::required_str(object, "id")?,
            username: decode::required_str(object, "username")?,
            team_id: decode::optional_str(object, "team_id")?,
        })
    }
}

/// The conversation the interaction happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

impl Channel {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            id: decode::required_str(object, "id")?,
            name: decode::required_str(object, "name")?,
        })
    }
}

/// Where the interactive component lives: a message, an attachment, or an
/// app unfurl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    #[serde(rename = "type")]
    pub container_type: String,
    /// Timestamp id of the surrounding message.
    pub message_ts: String,
    /// Index of the attachment the component sits in.
    pub attachment_id: i64,
    pub channel_id: String,
    /// Whether the surrounding message is visible only to the acting user.
    pub is_ephemeral: bool,
    pub is_app_unfurl: bool,
}

impl Container {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            container_type: decode::required_str(object, "type")?,
            message_ts: decode::required_str(object, "message_ts")?,
            attachment_id: decode::required_i64(object, "attachment_id")?,
            channel_id: decode::required_str(object, "channel_id")?,
            is_ephemeral: decode::required_bool(object, "is_ephemeral")?,
            is_app_unfurl: decode::required_bool(object, "is_app_unfurl")?,
        })
    }
}

/// The message an attachment-era interactive component was posted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
    pub user: String,
    pub ts: String,
}

impl Message {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            bot_id: decode::optional_str(object, "bot_id")?,
            message_type: decode::required_str(object, "type")?,
            text: decode::required_str(object, "text")?,
            user: decode::required_str(object, "user")?,
            ts: decode::required_str(object, "ts")?,
        })
    }
}

/// Author of the message a message action was invoked on.
///
/// Message actions carry a `name` instead of the `username` field the other
/// payload kinds use, so this is a distinct shape from [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageActionUser {
    pub id: String,
    pub name: String,
}

impl MessageActionUser {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            id: decode::required_str(object, "id")?,
            name: decode::required_str(object, "name")?,
        })
    }
}

/// The message a message action was invoked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageActionMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub user: String,
    pub ts: String,
    pub text: String,
}

impl MessageActionMessage {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            message_type: decode::required_str(object, "type")?,
            user: decode::required_str(object, "user")?,
            ts: decode::required_str(object, "ts")?,
            text: decode::required_str(object, "text")?,
        })
    }
}
