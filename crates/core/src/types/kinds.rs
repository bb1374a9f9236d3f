//! Closed-set wire enumerations.
//!
//! Each enum here doubles as a wire discriminator: its serialized form is the
//! exact lowercase literal Slack sends, and [`from_wire`](InteractionKind::from_wire)
//! only accepts exact members of the set. Round-tripping a member through
//! `as_str` or serde yields the original literal byte for byte — no
//! type-name decoration anywhere.

use core::fmt;

use serde::Serialize;

use crate::error::{DecodeError, FieldPath};

/// The interaction kind carried in a payload's top-level `type` field.
///
/// This is the discriminator that selects which of the five webhook shapes
/// the rest of the payload must conform to.
///
/// ## Examples
///
/// ```
/// use slack_interactivity_core::InteractionKind;
///
/// let kind = InteractionKind::from_wire("block_actions").unwrap();
/// assert_eq!(kind, InteractionKind::BlockActions);
/// assert_eq!(kind.as_str(), "block_actions");
///
/// // Serialization is the plain literal, not a decorated form.
/// assert_eq!(
///     serde_json::to_string(&kind).unwrap(),
///     "\"block_actions\""
/// );
///
/// assert!(InteractionKind::from_wire("BLOCK_ACTIONS").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// A component interaction inside a Block Kit surface.
    BlockActions,
    /// A legacy attachment-based message interaction.
    InteractiveMessage,
    /// A modal submitted via its submit button.
    ViewSubmission,
    /// A global shortcut invoked from the shortcuts menu.
    Shortcut,
    /// A message action invoked from a message's context menu.
    MessageAction,
}

impl InteractionKind {
    /// Every accepted `type` literal, in declaration order.
    pub const WIRE_NAMES: &'static [&'static str] = &[
        "block_actions",
        "interactive_message",
        "view_submission",
        "shortcut",
        "message_action",
    ];

    /// The exact wire literal for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlockActions => "block_actions",
            Self::InteractiveMessage => "interactive_message",
            Self::ViewSubmission => "view_submission",
            Self::Shortcut => "shortcut",
            Self::MessageAction => "message_action",
        }
    }

    /// Parse an exact wire literal.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidEnumValue`] naming the accepted set if
    /// `value` is not one of the five literals.
    pub fn from_wire(value: &str) -> Result<Self, DecodeError> {
        match value {
            "block_actions" => Ok(Self::BlockActions),
            "interactive_message" => Ok(Self::InteractiveMessage),
            "view_submission" => Ok(Self::ViewSubmission),
            "shortcut" => Ok(Self::Shortcut),
            "message_action" => Ok(Self::MessageAction),
            other => Err(DecodeError::InvalidEnumValue {
                path: FieldPath::root(),
                value: other.to_owned(),
                allowed: Self::WIRE_NAMES,
            }),
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InteractionKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}

/// The kind of a [`View`](crate::View). Modals are the only surface this
/// payload family carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Modal,
}

impl ViewKind {
    /// Every accepted `type` literal.
    pub const WIRE_NAMES: &'static [&'static str] = &["modal"];

    /// The exact wire literal for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modal => "modal",
        }
    }

    /// Parse an exact wire literal.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidEnumValue`] if `value` is not `modal`.
    pub fn from_wire(value: &str) -> Result<Self, DecodeError> {
        match value {
            "modal" => Ok(Self::Modal),
            other => Err(DecodeError::InvalidEnumValue {
                path: FieldPath::root(),
                value: other.to_owned(),
                allowed: Self::WIRE_NAMES,
            }),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}

/// The kind of a [`TextSpan`](crate::TextSpan): plain text or Slack-flavored
/// markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    PlainText,
    Mrkdwn,
}

impl TextKind {
    /// Every accepted `type` literal.
    pub const WIRE_NAMES: &'static [&'static str] = &["plain_text", "mrkdwn"];

    /// The exact wire literal for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Mrkdwn => "mrkdwn",
        }
    }

    /// Parse an exact wire literal.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidEnumValue`] naming the accepted set if
    /// `value` is neither `plain_text` nor `mrkdwn`.
    pub fn from_wire(value: &str) -> Result<Self, DecodeError> {
        match value {
            "plain_text" => Ok(Self::PlainText),
            "mrkdwn" => Ok(Self::Mrkdwn),
            other => Err(DecodeError::InvalidEnumValue {
                path: FieldPath::root(),
                value: other.to_owned(),
                allowed: Self::WIRE_NAMES,
            }),
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}
