//! Typed records for Slack interaction payloads.
//!
//! Everything here decodes from a `serde_json::Value` through the crate's
//! validating descent and serializes back to the wire shape.

pub mod actions;
pub mod blocks;
pub mod entities;
pub mod kinds;
pub mod payload;
pub mod text;
pub mod view;

pub use actions::Action;
pub use blocks::{Block, Element};
pub use entities::{
    Channel, Container, Message, MessageActionMessage, MessageActionUser, Team, User,
};
pub use kinds::{InteractionKind, TextKind, ViewKind};
pub use payload::{
    BlockActionsPayload, GlobalShortcutPayload, InteractiveMessagePayload, MessageActionPayload,
    ViewSubmissionPayload, WebhookPayload,
};
pub use text::{TextSpan, TextValue};
pub use view::{View, ViewResponseUrl, ViewState};
