//! The interaction payload variants and the discriminator dispatch that
//! selects between them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::decode;
use crate::error::DecodeError;
use crate::types::{
    Action, Channel, Container, InteractionKind, Message, MessageActionMessage, MessageActionUser,
    Team, User, View,
};

/// A press on an attachment-era interactive component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveMessagePayload {
    pub trigger_id: String,
    pub token: String,
    pub team: Team,
    pub user: User,
    pub api_app_id: String,
    pub container: Container,
    pub channel: Channel,
    pub message: Message,
    pub response_url: String,
    pub actions: Vec<Action>,
}

impl InteractiveMessagePayload {
    fn decode(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            trigger_id: decode::required_str(object, "trigger_id")?,
            token: decode::required_str(object, "token")?,
            team: decode::required_record(object, "team", Team::decode)?,
            user: decode::required_record(object, "user", User::decode)?,
            api_app_id: decode::required_str(object, "api_app_id")?,
            container: decode::required_record(object, "container", Container::decode)?,
            channel: decode::required_record(object, "channel", Channel::decode)?,
            message: decode::required_record(object, "message", Message::decode)?,
            response_url: decode::required_str(object, "response_url")?,
            actions: decode::required_list(object, "actions", Action::decode)?,
        })
    }
}

/// A press on a Block Kit component, always carrying the enclosing view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockActionsPayload {
    pub team: Team,
    pub user: User,
    pub api_app_id: String,
    pub token: String,
    pub container: Container,
    pub trigger_id: String,
    pub view: View,
    pub actions: Vec<Action>,
}

impl BlockActionsPayload {
    fn decode(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            team: decode::required_record(object, "team", Team::decode)?,
            user: decode::required_record(object, "user", User::decode)?,
            api_app_id: decode::required_str(object, "api_app_id")?,
            token: decode::required_str(object, "token")?,
            container: decode::required_record(object, "container", Container::decode)?,
            trigger_id: decode::required_str(object, "trigger_id")?,
            view: decode::required_record(object, "view", View::decode)?,
            actions: decode::required_list(object, "actions", Action::decode)?,
        })
    }
}

/// A global shortcut run from the shortcuts menu or the search bar.
///
/// Shortcuts fire outside any message or view, so this is the leanest
/// variant: identifiers only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalShortcutPayload {
    pub token: String,
    pub action_ts: String,
    pub team: Team,
    pub user: User,
    pub callback_id: String,
    pub trigger_id: String,
}

impl GlobalShortcutPayload {
    fn decode(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            token: decode::required_str(object, "token")?,
            action_ts: decode::required_str(object, "action_ts")?,
            team: decode::required_record(object, "team", Team::decode)?,
            user: decode::required_record(object, "user", User::decode)?,
            callback_id: decode::required_str(object, "callback_id")?,
            trigger_id: decode::required_str(object, "trigger_id")?,
        })
    }
}

/// A message action run from a message's context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageActionPayload {
    pub token: String,
    pub callback_id: String,
    pub trigger_id: String,
    pub response_url: String,
    pub team: Team,
    pub channel: Channel,
    pub user: MessageActionUser,
    pub message: MessageActionMessage,
}

impl MessageActionPayload {
    fn decode(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            token: decode::required_str(object, "token")?,
            callback_id: decode::required_str(object, "callback_id")?,
            trigger_id: decode::required_str(object, "trigger_id")?,
            response_url: decode::required_str(object, "response_url")?,
            team: decode::required_record(object, "team", Team::decode)?,
            channel: decode::required_record(object, "channel", Channel::decode)?,
            user: decode::required_record(object, "user", MessageActionUser::decode)?,
            message: decode::required_record(object, "message", MessageActionMessage::decode)?,
        })
    }
}

/// A modal submitted with its final state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSubmissionPayload {
    pub team: Team,
    pub user: User,
    pub view: View,
}

impl ViewSubmissionPayload {
    fn decode(object: &Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            team: decode::required_record(object, "team", Team::decode)?,
            user: decode::required_record(object, "user", User::decode)?,
            view: decode::required_record(object, "view", View::decode)?,
        })
    }
}

/// Any payload Slack posts to an app's interactivity endpoint, discriminated
/// by the top-level `type` field.
///
/// [`decode`] reads the discriminator once and validates exactly the matching
/// variant. There is no trial-and-error across variants and no partial
/// result: a payload either decodes completely or fails with the first error
/// on a depth-first walk, located by its [`FieldPath`].
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use slack_interactivity_core::{InteractionKind, WebhookPayload};
///
/// let raw = json!({
///     "type": "shortcut",
///     "token": "verification-token",
///     "action_ts": "1606903800.000001",
///     "team": {"id": "T0AAAAAAA", "domain": "acme"},
///     "user": {"id": "U0AAAAAAA", "username": "lee"},
///     "callback_id": "open_ticket",
///     "trigger_id": "13345224609.738474920.8088930838d8"
/// });
///
/// let payload = WebhookPayload::decode(&raw)?;
/// assert_eq!(payload.kind(), InteractionKind::Shortcut);
///
/// match payload {
///     WebhookPayload::Shortcut(shortcut) => assert_eq!(shortcut.callback_id, "open_ticket"),
///     other => panic!("expected a shortcut, got {other:?}"),
/// }
/// # Ok::<(), slack_interactivity_core::DecodeError>(())
/// ```
///
/// [`decode`]: WebhookPayload::decode
/// [`FieldPath`]: crate::error::FieldPath
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WebhookPayload {
    BlockActions(BlockActionsPayload),
    InteractiveMessage(InteractiveMessagePayload),
    ViewSubmission(ViewSubmissionPayload),
    Shortcut(GlobalShortcutPayload),
    MessageAction(MessageActionPayload),
}

impl WebhookPayload {
    /// Decode and validate one interaction payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnrecognizedDiscriminator`] when `type` is
    /// missing or not one of the five known literals, and a located
    /// [`DecodeError`] when any field of the dispatched variant is missing,
    /// has the wrong JSON type, or carries a value outside its closed set.
    pub fn decode(value: &Value) -> Result<Self, DecodeError> {
        Self::dispatch(value).inspect_err(|error| {
            debug!(error = %error, "Rejected interaction payload");
        })
    }

    fn dispatch(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        let kind = match object.get("type") {
            Some(Value::String(literal)) => InteractionKind::from_wire(literal).map_err(|_| {
                DecodeError::UnrecognizedDiscriminator {
                    found: Some(literal.clone()),
                }
            })?,
            Some(other) => {
                // A non-string discriminator is unrecognized, not a type
                // mismatch: the dispatch table is keyed by strings only.
                return Err(DecodeError::UnrecognizedDiscriminator {
                    found: Some(other.to_string()),
                });
            }
            None => return Err(DecodeError::UnrecognizedDiscriminator { found: None }),
        };

        trace!(kind = %kind, "Dispatching interaction payload");
        match kind {
            InteractionKind::BlockActions => {
                BlockActionsPayload::decode(object).map(Self::BlockActions)
            }
            InteractionKind::InteractiveMessage => {
                InteractiveMessagePayload::decode(object).map(Self::InteractiveMessage)
            }
            InteractionKind::ViewSubmission => {
                ViewSubmissionPayload::decode(object).map(Self::ViewSubmission)
            }
            InteractionKind::Shortcut => GlobalShortcutPayload::decode(object).map(Self::Shortcut),
            InteractionKind::MessageAction => {
                MessageActionPayload::decode(object).map(Self::MessageAction)
            }
        }
    }

    /// The discriminator this payload was dispatched on.
    #[must_use]
    pub const fn kind(&self) -> InteractionKind {
        match self {
            Self::BlockActions(_) => InteractionKind::BlockActions,
            Self::InteractiveMessage(_) => InteractionKind::InteractiveMessage,
            Self::ViewSubmission(_) => InteractionKind::ViewSubmission,
            Self::Shortcut(_) => InteractionKind::Shortcut,
            Self::MessageAction(_) => InteractionKind::MessageAction,
        }
    }
}

impl TryFrom<&Value> for WebhookPayload {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl<'de> Deserialize<'de> for WebhookPayload {
    /// Buffers the input into a [`Value`] and runs [`WebhookPayload::decode`],
    /// so `serde_json::from_str` and framework extractors share the one
    /// validation path.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}
