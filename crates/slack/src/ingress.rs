//! Decoding of inbound Slack HTTP bodies.
//!
//! Slack delivers three shapes to the same endpoint: Events API callbacks as
//! JSON, interactive payloads as a form with a single `payload` JSON field,
//! and slash commands as a plain form.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    commands::SlashCommandPayload,
    events::{AppHomeOpenedEvent, BlockActionEvent, MessageEvent, SlackEnvelope, SlackEvent},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IngressRequest {
    UrlVerification { challenge: String },
    SslCheck,
    Envelope(SlackEnvelope),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IngressError {
    #[error("unsupported content type `{0}`")]
    UnsupportedContentType(String),
    #[error("malformed slack request: {0}")]
    Malformed(String),
}

pub fn parse_request(content_type: Option<&str>, body: &[u8]) -> Result<IngressRequest, IngressError> {
    let media_type = content_type
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match media_type.as_str() {
        "application/json" => parse_events_api(body),
        "application/x-www-form-urlencoded" => parse_form(body),
        _ => Err(IngressError::UnsupportedContentType(media_type)),
    }
}

fn malformed(error: impl std::fmt::Display) -> IngressError {
    IngressError::Malformed(error.to_string())
}

fn generated_envelope_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Deserialize)]
struct RawMessage {
    channel: String,
    user: Option<String>,
    bot_id: Option<String>,
    subtype: Option<String>,
    text: Option<String>,
    ts: Option<String>,
}

#[derive(Deserialize)]
struct RawAppHomeOpened {
    user: String,
    channel: Option<String>,
    tab: Option<String>,
}

fn parse_events_api(body: &[u8]) -> Result<IngressRequest, IngressError> {
    let value: Value = serde_json::from_slice(body).map_err(malformed)?;
    let outer_type = value.get("type").and_then(Value::as_str).unwrap_or_default();

    match outer_type {
        "url_verification" => {
            let challenge = value
                .get("challenge")
                .and_then(Value::as_str)
                .ok_or_else(|| malformed("url_verification without challenge"))?;
            Ok(IngressRequest::UrlVerification { challenge: challenge.to_owned() })
        }
        "event_callback" => {
            let envelope_id = value
                .get("event_id")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(generated_envelope_id);
            let inner = value
                .get("event")
                .cloned()
                .ok_or_else(|| malformed("event_callback without event"))?;
            let event = parse_inner_event(inner)?;
            Ok(IngressRequest::Envelope(SlackEnvelope { envelope_id, event }))
        }
        other => Ok(IngressRequest::Envelope(SlackEnvelope {
            envelope_id: generated_envelope_id(),
            event: SlackEvent::Unsupported { event_type: other.to_owned() },
        })),
    }
}

fn parse_inner_event(event: Value) -> Result<SlackEvent, IngressError> {
    let event_type = event.get("type").and_then(Value::as_str).unwrap_or_default().to_owned();

    match event_type.as_str() {
        "message" => {
            let raw: RawMessage = serde_json::from_value(event).map_err(malformed)?;
            Ok(SlackEvent::Message(MessageEvent {
                channel_id: raw.channel,
                user_id: raw.user,
                bot_id: raw.bot_id,
                subtype: raw.subtype,
                text: raw.text,
                ts: raw.ts,
            }))
        }
        "app_home_opened" => {
            let raw: RawAppHomeOpened = serde_json::from_value(event).map_err(malformed)?;
            Ok(SlackEvent::AppHomeOpened(AppHomeOpenedEvent {
                user_id: raw.user,
                channel_id: raw.channel,
                tab: raw.tab,
            }))
        }
        _ => Ok(SlackEvent::Unsupported { event_type }),
    }
}

#[derive(Deserialize)]
struct RawBlockActions {
    user: RawId,
    channel: Option<RawId>,
    trigger_id: String,
    actions: Vec<RawAction>,
}

#[derive(Deserialize)]
struct RawId {
    id: String,
}

#[derive(Deserialize)]
struct RawAction {
    action_id: String,
    block_id: Option<String>,
    value: Option<String>,
}

fn parse_form(body: &[u8]) -> Result<IngressRequest, IngressError> {
    let mut fields: HashMap<String, String> =
        url::form_urlencoded::parse(body).into_owned().collect();

    if fields.get("ssl_check").map(String::as_str) == Some("1") {
        return Ok(IngressRequest::SslCheck);
    }

    let event = match fields.remove("payload") {
        Some(payload) => parse_interactive_payload(&payload)?,
        None => SlackEvent::SlashCommand(parse_slash_command_form(fields)?),
    };

    Ok(IngressRequest::Envelope(SlackEnvelope { envelope_id: generated_envelope_id(), event }))
}

fn parse_interactive_payload(payload: &str) -> Result<SlackEvent, IngressError> {
    let value: Value = serde_json::from_str(payload).map_err(malformed)?;
    let payload_type = value.get("type").and_then(Value::as_str).unwrap_or_default().to_owned();
    if payload_type != "block_actions" {
        return Ok(SlackEvent::Unsupported { event_type: payload_type });
    }

    let raw: RawBlockActions = serde_json::from_value(value).map_err(malformed)?;
    let action = raw
        .actions
        .into_iter()
        .next()
        .ok_or_else(|| malformed("block_actions payload without actions"))?;

    Ok(SlackEvent::BlockAction(BlockActionEvent {
        user_id: raw.user.id,
        channel_id: raw.channel.map(|channel| channel.id),
        trigger_id: raw.trigger_id,
        action_id: action.action_id,
        block_id: action.block_id,
        value: action.value,
    }))
}

fn parse_slash_command_form(
    mut fields: HashMap<String, String>,
) -> Result<SlashCommandPayload, IngressError> {
    let mut required = |name: &str| {
        fields.remove(name).ok_or_else(|| malformed(format!("slash command without `{name}`")))
    };
    let command = required("command")?;
    let user_id = required("user_id")?;
    let channel_id = required("channel_id")?;

    Ok(SlashCommandPayload {
        command,
        user_id,
        channel_id,
        text: fields.remove("text").unwrap_or_default(),
        trigger_id: fields.remove("trigger_id").unwrap_or_default(),
    })
}
