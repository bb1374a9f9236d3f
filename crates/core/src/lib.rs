//! Slack Interactivity Core - Typed interaction webhook payloads.
//!
//! This crate turns the JSON bodies Slack posts to an app's interactivity
//! endpoint into typed values. The top-level `type` field selects one of five
//! payload kinds (`block_actions`, `interactive_message`, `view_submission`,
//! `shortcut`, `message_action`); decoding dispatches on it once, validates
//! the matching shape recursively, and reports the first problem with a full
//! field path such as `view.blocks[2].elements[0].type`.
//!
//! # Architecture
//!
//! The crate contains only types and validation - no I/O, no HTTP handling,
//! no signature verification. It takes an already parsed `serde_json::Value`
//! and returns either a [`WebhookPayload`] or a [`DecodeError`]. Endpoint
//! concerns (reading the body, verifying `X-Slack-Signature`, replying within
//! Slack's deadline) stay with the caller.
//!
//! # Modules
//!
//! - [`types`] - Payload variants and the records they are built from
//! - [`error`] - The decode error taxonomy and field path machinery
//!
//! # Examples
//!
//! ```
//! use slack_interactivity_core::WebhookPayload;
//!
//! let body = r#"{
//!     "type": "shortcut",
//!     "token": "verification-token",
//!     "action_ts": "1606903800.000001",
//!     "team": {"id": "T0AAAAAAA", "domain": "acme"},
//!     "user": {"id": "U0AAAAAAA", "username": "lee"},
//!     "callback_id": "open_ticket",
//!     "trigger_id": "13345224609.738474920.8088930838d8"
//! }"#;
//!
//! let value: serde_json::Value = serde_json::from_str(body)?;
//! match WebhookPayload::decode(&value) {
//!     Ok(WebhookPayload::Shortcut(shortcut)) => {
//!         assert_eq!(shortcut.callback_id, "open_ticket");
//!     }
//!     Ok(other) => panic!("unexpected payload kind {:?}", other.kind()),
//!     Err(error) => panic!("payload rejected: {error}"),
//! }
//! # Ok::<(), serde_json::Error>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod types;

mod decode;

pub use error::{DecodeError, FieldPath, PathSegment, ValueKind};
pub use types::*;
