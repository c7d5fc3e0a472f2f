//! Slack integration for the yougo glossary bot
//!
//! This crate turns signed Slack HTTP requests into replies:
//! - **Signature** (`signature`) - `v0` HMAC request verification
//! - **Ingress** (`ingress`) - Events API, interactive and slash command bodies
//! - **Events** (`events`) - `EventDispatcher` and the trigger/command handlers
//! - **Slash Commands** (`commands`) - `/echo <term>` and `/ask`
//! - **Block Kit** (`blocks`, `views`) - message builders, App Home and the edit modal
//! - **Web API** (`api`) - `chat.postMessage`, `views.publish`, `views.open`
//!
//! # Architecture
//!
//! ```text
//! HTTP body → SignatureVerifier → parse_request → EventDispatcher → SlackApi
//!                                                      ↓
//!                                                  Glossary
//! ```
//!
//! # Key Types
//!
//! - `EventDispatcher` - Matches each `SlackEvent` to its handler
//! - `SlackApi` - Outbound calls, implemented by `WebApiClient`
//! - `Acknowledge` - Per-request acknowledgement handle
//! - `BlocksBuilder` - Constructs Block Kit payloads

pub mod api;
pub mod blocks;
pub mod commands;
pub mod events;
pub mod ingress;
pub mod signature;
pub mod views;
