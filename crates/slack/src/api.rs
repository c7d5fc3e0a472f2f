//! Outbound Slack Web API calls.
//!
//! Handlers only ever see [`SlackApi`]; [`WebApiClient`] is the reqwest-backed
//! implementation used by the server.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::blocks::{Attachment, MessageTemplate};
use crate::views::View;

/// A `say` reply, posted to the channel the triggering event came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutboundMessage {
    Text(String),
    Blocks(MessageTemplate),
    Attachments(Vec<Attachment>),
    /// No content. Slack rejects these with `no_text`, which fails the dispatch.
    Empty,
}

impl OutboundMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Blocks(_) => "blocks",
            Self::Attachments(_) => "attachments",
            Self::Empty => "empty",
        }
    }

    pub fn post_message_body(&self, channel: &str) -> Value {
        match self {
            Self::Text(text) => json!({ "channel": channel, "text": text }),
            Self::Blocks(message) => json!({
                "channel": channel,
                "text": message.fallback_text,
                "blocks": message.blocks,
            }),
            Self::Attachments(attachments) => json!({
                "channel": channel,
                "attachments": attachments,
            }),
            Self::Empty => json!({ "channel": channel }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostedMessage {
    pub ts: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublishedView {
    pub view_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum SlackApiError {
    #[error("{method} request failed: {source}")]
    Transport {
        method: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} returned HTTP {status}")]
    Status { method: &'static str, status: u16 },
    #[error("{method} response could not be decoded: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} error: {error}")]
    Api { method: &'static str, error: String },
}

#[async_trait]
pub trait SlackApi: Send + Sync {
    async fn post_message(
        &self,
        channel: &str,
        message: &OutboundMessage,
    ) -> Result<PostedMessage, SlackApiError>;

    async fn publish_view(&self, user_id: &str, view: &View) -> Result<PublishedView, SlackApiError>;

    /// Opens a modal; `token` overrides the client's bot token when the
    /// request context carries one.
    async fn open_view(
        &self,
        token: Option<&SecretString>,
        trigger_id: &str,
        view: &View,
    ) -> Result<(), SlackApiError>;
}

#[derive(Debug, Deserialize)]
struct SlackApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    ts: Option<String>,
    #[serde(default)]
    view: Option<ViewRef>,
}

#[derive(Debug, Deserialize)]
struct ViewRef {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct WebApiClient {
    http: reqwest::Client,
    bot_token: SecretString,
    base_url: String,
}

impl WebApiClient {
    pub fn new(bot_token: SecretString, base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), bot_token, base_url)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        bot_token: SecretString,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, bot_token, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call(
        &self,
        method: &'static str,
        token: &SecretString,
        body: &Value,
    ) -> Result<SlackApiResponse, SlackApiError> {
        let response = self
            .http
            .post(format!("{}/{method}", self.base_url))
            .bearer_auth(token.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|source| SlackApiError::Transport { method, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SlackApiError::Status { method, status: status.as_u16() });
        }

        let payload: SlackApiResponse =
            response.json().await.map_err(|source| SlackApiError::Decode { method, source })?;
        if !payload.ok {
            return Err(SlackApiError::Api {
                method,
                error: payload.error.unwrap_or_else(|| "unknown_error".to_owned()),
            });
        }
        Ok(payload)
    }
}

#[async_trait]
impl SlackApi for WebApiClient {
    async fn post_message(
        &self,
        channel: &str,
        message: &OutboundMessage,
    ) -> Result<PostedMessage, SlackApiError> {
        debug!(channel, kind = message.kind(), "posting slack message");
        let response =
            self.call("chat.postMessage", &self.bot_token, &message.post_message_body(channel)).await?;
        Ok(PostedMessage { ts: response.ts })
    }

    async fn publish_view(&self, user_id: &str, view: &View) -> Result<PublishedView, SlackApiError> {
        debug!(user_id, kind = view.kind(), "publishing slack view");
        let body = json!({ "user_id": user_id, "view": view });
        let response = self.call("views.publish", &self.bot_token, &body).await?;
        Ok(PublishedView { view_id: response.view.and_then(|view| view.id) })
    }

    async fn open_view(
        &self,
        token: Option<&SecretString>,
        trigger_id: &str,
        view: &View,
    ) -> Result<(), SlackApiError> {
        debug!(trigger_id, kind = view.kind(), "opening slack view");
        let body = json!({ "trigger_id": trigger_id, "view": view });
        self.call("views.open", token.unwrap_or(&self.bot_token), &body).await?;
        Ok(())
    }
}
