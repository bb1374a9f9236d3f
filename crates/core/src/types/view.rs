//! Modal views, their submitted state, and per-input response URLs.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::decode;
use crate::error::DecodeError;
use crate::types::{Block, TextSpan, TextValue, ViewKind};

/// The submitted form state of a view: `block_id` to `action_id` to the
/// control-specific value object.
///
/// Per-control value shapes vary too much to model. The map stays raw JSON
/// and [`ViewState::value`] walks the two levels on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub values: Map<String, Value>,
}

impl ViewState {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            values: decode::required_object(object, "values")?,
        })
    }

    /// Look up the raw submitted value for one input.
    ///
    /// ## Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use slack_interactivity_core::ViewState;
    ///
    /// let state = ViewState {
    ///     values: json!({
    ///         "note": {"note_text": {"type": "plain_text_input", "value": "ship it"}}
    ///     })
    ///     .as_object()
    ///     .cloned()
    ///     .unwrap(),
    /// };
    ///
    /// let entry = state.value("note", "note_text").unwrap();
    /// assert_eq!(entry["value"], "ship it");
    /// assert_eq!(state.value("note", "other"), None);
    /// ```
    #[must_use]
    pub fn value(&self, block_id: &str, action_id: &str) -> Option<&Value> {
        self.values.get(block_id)?.get(action_id)
    }
}

/// A response URL minted for a `response_url_enabled` input of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewResponseUrl {
    pub block_id: String,
    pub action_id: String,
    pub channel_id: String,
    pub response_url: String,
}

impl ViewResponseUrl {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        Ok(Self {
            block_id: decode::required_str(object, "block_id")?,
            action_id: decode::required_str(object, "action_id")?,
            channel_id: decode::required_str(object, "channel_id")?,
            response_url: decode::required_str(object, "response_url")?,
        })
    }
}

/// A modal view, as attached to `block_actions` and `view_submission`
/// payloads.
///
/// `blocks`, `close`, and `submit` are required alongside the `modal` type
/// marker. Everything else is identifier plumbing the platform fills in as
/// the modal moves through its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    #[serde(rename = "type")]
    pub view_type: ViewKind,
    pub blocks: Vec<Block>,
    /// Title of the modal, structured or bare string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextValue>,
    pub close: TextSpan,
    pub submit: TextSpan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ViewState>,
    /// Fingerprint used to detect concurrent edits of the same view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_on_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_view_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_view_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_installed_team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_urls: Option<Vec<ViewResponseUrl>>,
}

impl View {
    pub(crate) fn decode(value: &Value) -> Result<Self, DecodeError> {
        let object = decode::as_object(value)?;
        let raw_type = decode::required_str(object, "type")?;
        let view_type = ViewKind::from_wire(&raw_type).map_err(|err| err.at("type"))?;
        Ok(Self {
            view_type,
            blocks: decode::required_list(object, "blocks", Block::decode)?,
            title: decode::optional_record(object, "title", TextValue::decode)?,
            close: decode::required_record(object, "close", TextSpan::decode)?,
            submit: decode::required_record(object, "submit", TextSpan::decode)?,
            id: decode::optional_str(object, "id")?,
            team_id: decode::optional_str(object, "team_id")?,
            private_metadata: decode::optional_str(object, "private_metadata")?,
            callback_id: decode::optional_str(object, "callback_id")?,
            state: decode::optional_record(object, "state", ViewState::decode)?,
            hash: decode::optional_str(object, "hash")?,
            clear_on_close: decode::optional_bool(object, "clear_on_close")?,
            notify_on_close: decode::optional_bool(object, "notify_on_close")?,
            previous_view_id: decode::optional_str(object, "previous_view_id")?,
            root_view_id: decode::optional_str(object, "root_view_id")?,
            app_id: decode::optional_str(object, "app_id")?,
            external_id: decode::optional_str(object, "external_id")?,
            app_installed_team_id: decode::optional_str(object, "app_installed_team_id")?,
            bot_id: decode::optional_str(object, "bot_id")?,
            response_urls: decode::optional_list(object, "response_urls", ViewResponseUrl::decode)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::TextKind;

    fn minimal_view() -> Value {
        json!({
            "type": "modal",
            "blocks": [],
            "close": {"type": "plain_text", "text": "Cancel"},
            "submit": {"type": "plain_text", "text": "Submit"}
        })
    }

    #[test]
    fn test_decode_minimal_view() {
        let view = View::decode(&minimal_view()).unwrap();
        assert_eq!(view.view_type, ViewKind::Modal);
        assert!(view.blocks.is_empty());
        assert_eq!(view.close.text, "Cancel");
        assert_eq!(view.submit.text, "Submit");
        assert_eq!(view.title, None);
        assert_eq!(view.state, None);
    }

    #[test]
    fn test_view_rejects_non_modal_type() {
        let mut raw = minimal_view();
        raw["type"] = json!("home");
        let err = View::decode(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type: invalid value \"home\", expected one of: modal"
        );
    }

    #[test]
    fn test_view_requires_close_and_submit() {
        let mut raw = minimal_view();
        raw.as_object_mut().unwrap().remove("submit");
        let err = View::decode(&raw).unwrap_err();
        assert_eq!(err.to_string(), "submit: missing required field");
    }

    #[test]
    fn test_title_takes_bare_strings() {
        let mut raw = minimal_view();
        raw["title"] = json!("Review order");
        let view = View::decode(&raw).unwrap();
        assert_eq!(view.title, Some(TextValue::Plain("Review order".to_owned())));
    }

    #[test]
    fn test_title_takes_structured_spans() {
        let mut raw = minimal_view();
        raw["title"] = json!({"type": "plain_text", "text": "Review order"});
        let view = View::decode(&raw).unwrap();
        match view.title {
            Some(TextValue::Span(span)) => {
                assert_eq!(span.text_type, TextKind::PlainText);
                assert_eq!(span.text, "Review order");
            }
            other => panic!("expected a structured title, got {other:?}"),
        }
    }

    #[test]
    fn test_block_failures_carry_the_view_relative_path() {
        let mut raw = minimal_view();
        raw["blocks"] = json!([
            {"type": "section", "text": {"type": "mrkdwn", "text": "ok"}},
            {"type": "section", "text": {"type": "shout", "text": "bad"}}
        ]);
        let err = View::decode(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "blocks[1].text.type: invalid value \"shout\", expected one of: plain_text, mrkdwn"
        );
    }

    #[test]
    fn test_state_values_must_be_an_object() {
        let mut raw = minimal_view();
        raw["state"] = json!({"values": []});
        let err = View::decode(&raw).unwrap_err();
        assert_eq!(err.to_string(), "state.values: expected an object, found an array");
    }

    #[test]
    fn test_state_lookup() {
        let mut raw = minimal_view();
        raw["state"] = json!({
            "values": {
                "note": {"note_text": {"type": "plain_text_input", "value": "ship it"}}
            }
        });
        let view = View::decode(&raw).unwrap();
        let state = view.state.unwrap();
        assert_eq!(
            state.value("note", "note_text").unwrap()["value"],
            json!("ship it")
        );
        assert_eq!(state.value("note", "missing"), None);
        assert_eq!(state.value("missing", "note_text"), None);
    }

    #[test]
    fn test_decode_response_urls() {
        let mut raw = minimal_view();
        raw["response_urls"] = json!([{
            "block_id": "pick",
            "action_id": "conversation",
            "channel_id": "C0AAAAAAA",
            "response_url": "https://hooks.slack.com/app/T0AAAAAAA/0000/secret"
        }]);
        let view = View::decode(&raw).unwrap();
        let urls = view.response_urls.unwrap();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].channel_id, "C0AAAAAAA");
    }

    #[test]
    fn test_view_serializes_without_absent_fields() {
        let view = View::decode(&minimal_view()).unwrap();
        assert_eq!(serde_json::to_value(&view).unwrap(), minimal_view());
    }
}
