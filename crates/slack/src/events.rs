use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use yougo_core::{featured_term, Glossary};

use crate::{
    api::{OutboundMessage, SlackApi, SlackApiError},
    blocks::{
        button_thanks_text, farewell_text, scold_message, term_card_attachment,
        EDIT_BUTTON_ACTION_ID, OPEN_MODAL_ACTION_ID,
    },
    commands::{echo_confirmation_text, parse_slash_command, SlashCommand, SlashCommandPayload},
    views::{home_view, term_edit_modal},
};

pub const SCOLD_TRIGGER: &str = "hatada";
pub const FAREWELL_TRIGGER: &str = "yuhi";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlackEnvelope {
    pub envelope_id: String,
    pub event: SlackEvent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlackEvent {
    Message(MessageEvent),
    BlockAction(BlockActionEvent),
    SlashCommand(SlashCommandPayload),
    AppHomeOpened(AppHomeOpenedEvent),
    Unsupported { event_type: String },
}

impl SlackEvent {
    pub fn event_type(&self) -> SlackEventType {
        match self {
            Self::Message(_) => SlackEventType::Message,
            Self::BlockAction(_) => SlackEventType::BlockAction,
            Self::SlashCommand(_) => SlackEventType::SlashCommand,
            Self::AppHomeOpened(_) => SlackEventType::AppHomeOpened,
            Self::Unsupported { .. } => SlackEventType::Unsupported,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Message(event) => event.user_id.as_deref(),
            Self::BlockAction(event) => Some(&event.user_id),
            Self::SlashCommand(payload) => Some(&payload.user_id),
            Self::AppHomeOpened(event) => Some(&event.user_id),
            Self::Unsupported { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlackEventType {
    Message,
    BlockAction,
    SlashCommand,
    AppHomeOpened,
    Unsupported,
}

impl SlackEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::BlockAction => "block_action",
            Self::SlashCommand => "slash_command",
            Self::AppHomeOpened => "app_home_opened",
            Self::Unsupported => "unsupported",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEvent {
    pub channel_id: String,
    /// Absent for some bot and system messages.
    pub user_id: Option<String>,
    /// Set on anything an app posted, including this bot's own replies.
    pub bot_id: Option<String>,
    pub subtype: Option<String>,
    pub text: Option<String>,
    pub ts: Option<String>,
}

impl MessageEvent {
    pub fn is_from_bot(&self) -> bool {
        self.bot_id.is_some() || self.subtype.as_deref() == Some("bot_message")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockActionEvent {
    pub user_id: String,
    pub channel_id: Option<String>,
    pub trigger_id: String,
    pub action_id: String,
    pub block_id: Option<String>,
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppHomeOpenedEvent {
    pub user_id: String,
    pub channel_id: Option<String>,
    pub tab: Option<String>,
}

#[derive(Clone, Debug)]
pub struct EventContext {
    pub correlation_id: String,
    /// Token for calls made on behalf of this request; falls back to the
    /// client's bot token when `None`.
    pub bot_token: Option<SecretString>,
}

impl EventContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self { correlation_id: correlation_id.into(), bot_token: None }
    }

    pub fn with_bot_token(mut self, bot_token: SecretString) -> Self {
        self.bot_token = Some(bot_token);
        self
    }
}

impl Default for EventContext {
    fn default() -> Self {
        Self::new("unknown-correlation-id")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerResult {
    Processed,
    Ignored,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("acknowledgement failed: {0}")]
pub struct AckError(pub String);

/// Tells Slack the interaction was received. Called at most once per event.
#[async_trait]
pub trait Acknowledge: Send + Sync {
    async fn ack(&self) -> Result<(), AckError>;
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Api(#[from] SlackApiError),
    #[error(transparent)]
    Ack(#[from] AckError),
    #[error("{event_type} event has no channel to reply to")]
    MissingChannel { event_type: &'static str },
}

pub struct EventDispatcher {
    api: Arc<dyn SlackApi>,
    glossary: Arc<Glossary>,
}

impl EventDispatcher {
    pub fn new(api: Arc<dyn SlackApi>, glossary: Arc<Glossary>) -> Self {
        Self { api, glossary }
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub async fn dispatch(
        &self,
        envelope: &SlackEnvelope,
        ack: &dyn Acknowledge,
        ctx: &EventContext,
    ) -> Result<HandlerResult, DispatchError> {
        debug!(
            event_name = "slack.event.received",
            correlation_id = %ctx.correlation_id,
            envelope_id = %envelope.envelope_id,
            event_type = envelope.event.event_type().as_str(),
            "dispatching slack event"
        );

        match &envelope.event {
            SlackEvent::Message(event) => self.handle_message(event, ctx).await,
            SlackEvent::BlockAction(event) => self.handle_block_action(event, ack, ctx).await,
            SlackEvent::SlashCommand(payload) => self.handle_slash_command(payload, ack, ctx).await,
            SlackEvent::AppHomeOpened(event) => Ok(self.handle_app_home_opened(event, ctx).await),
            SlackEvent::Unsupported { event_type } => {
                debug!(
                    event_name = "slack.event.unsupported",
                    correlation_id = %ctx.correlation_id,
                    event_type = %event_type,
                    "ignoring unsupported slack event"
                );
                Ok(HandlerResult::Ignored)
            }
        }
    }

    async fn handle_message(
        &self,
        event: &MessageEvent,
        ctx: &EventContext,
    ) -> Result<HandlerResult, DispatchError> {
        if event.is_from_bot() {
            debug!(
                event_name = "slack.message.bot_ignored",
                correlation_id = %ctx.correlation_id,
                bot_id = ?event.bot_id,
                subtype = ?event.subtype,
                "ignoring bot-authored message"
            );
            return Ok(HandlerResult::Ignored);
        }
        let (Some(text), Some(user_id)) = (event.text.as_deref(), event.user_id.as_deref()) else {
            return Ok(HandlerResult::Ignored);
        };

        let mut replied = false;
        if text.contains(SCOLD_TRIGGER) {
            let message = OutboundMessage::Blocks(scold_message(user_id));
            self.say(&event.channel_id, &message, ctx).await?;
            replied = true;
        }
        if text.contains(FAREWELL_TRIGGER) {
            let message = OutboundMessage::Text(farewell_text(user_id));
            self.say(&event.channel_id, &message, ctx).await?;
            replied = true;
        }

        Ok(if replied { HandlerResult::Processed } else { HandlerResult::Ignored })
    }

    async fn handle_block_action(
        &self,
        event: &BlockActionEvent,
        ack: &dyn Acknowledge,
        ctx: &EventContext,
    ) -> Result<HandlerResult, DispatchError> {
        match event.action_id.as_str() {
            EDIT_BUTTON_ACTION_ID => {
                let channel = event
                    .channel_id
                    .as_deref()
                    .ok_or(DispatchError::MissingChannel { event_type: "block_action" })?;
                let message = OutboundMessage::Text(button_thanks_text(&event.user_id));
                self.say(channel, &message, ctx).await?;
                ack.ack().await?;
                Ok(HandlerResult::Processed)
            }
            OPEN_MODAL_ACTION_ID => {
                debug!(
                    event_name = "slack.action.open_modal",
                    correlation_id = %ctx.correlation_id,
                    user_id = %event.user_id,
                    trigger_id = %event.trigger_id,
                    block_id = ?event.block_id,
                    value = ?event.value,
                    "received modal open action"
                );
                ack.ack().await?;
                self.api
                    .open_view(ctx.bot_token.as_ref(), &event.trigger_id, &term_edit_modal())
                    .await?;
                info!(
                    event_name = "slack.view.opened",
                    correlation_id = %ctx.correlation_id,
                    user_id = %event.user_id,
                    "opened term edit modal"
                );
                Ok(HandlerResult::Processed)
            }
            other => {
                warn!(
                    event_name = "slack.action.unknown",
                    correlation_id = %ctx.correlation_id,
                    action_id = other,
                    "ignoring unknown block action"
                );
                Ok(HandlerResult::Ignored)
            }
        }
    }

    async fn handle_slash_command(
        &self,
        payload: &SlashCommandPayload,
        ack: &dyn Acknowledge,
        ctx: &EventContext,
    ) -> Result<HandlerResult, DispatchError> {
        match parse_slash_command(payload) {
            SlashCommand::Echo { text } => {
                ack.ack().await?;
                let confirmation = OutboundMessage::Text(echo_confirmation_text(&text));
                self.say(&payload.channel_id, &confirmation, ctx).await?;

                let answer = match self.glossary.lookup(&text) {
                    Some(definition) => OutboundMessage::Text(definition.to_owned()),
                    None => {
                        info!(
                            event_name = "glossary.lookup.miss",
                            correlation_id = %ctx.correlation_id,
                            term = %text,
                            "no glossary entry for term"
                        );
                        OutboundMessage::Empty
                    }
                };
                self.say(&payload.channel_id, &answer, ctx).await?;
                Ok(HandlerResult::Processed)
            }
            SlashCommand::Ask => {
                ack.ack().await?;
                let message = OutboundMessage::Attachments(vec![term_card_attachment(&featured_term())]);
                self.say(&payload.channel_id, &message, ctx).await?;
                Ok(HandlerResult::Processed)
            }
            SlashCommand::Unknown { command } => {
                warn!(
                    event_name = "slack.command.unknown",
                    correlation_id = %ctx.correlation_id,
                    command = %command,
                    "ignoring unknown slash command"
                );
                Ok(HandlerResult::Ignored)
            }
        }
    }

    /// Publishing the home tab is best effort; failures are logged only.
    async fn handle_app_home_opened(
        &self,
        event: &AppHomeOpenedEvent,
        ctx: &EventContext,
    ) -> HandlerResult {
        match self.api.publish_view(&event.user_id, &home_view()).await {
            Ok(published) => info!(
                event_name = "slack.home.published",
                correlation_id = %ctx.correlation_id,
                user_id = %event.user_id,
                view_id = ?published.view_id,
                "published app home"
            ),
            Err(source) => error!(
                event_name = "slack.home.publish_failed",
                correlation_id = %ctx.correlation_id,
                user_id = %event.user_id,
                error = %source,
                "failed to publish app home"
            ),
        }
        HandlerResult::Processed
    }

    async fn say(
        &self,
        channel: &str,
        message: &OutboundMessage,
        ctx: &EventContext,
    ) -> Result<(), DispatchError> {
        let posted = self.api.post_message(channel, message).await?;
        debug!(
            event_name = "slack.message.posted",
            correlation_id = %ctx.correlation_id,
            channel,
            kind = message.kind(),
            ts = ?posted.ts,
            "posted reply"
        );
        Ok(())
    }
}
