use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tracing::info;
use yougo_core::{
    config::{AppConfig, ConfigError},
    Glossary,
};
use yougo_slack::{api::WebApiClient, events::EventDispatcher, signature::SignatureVerifier};

use crate::{
    health::HealthState,
    routes::{self, EventsState},
};

pub struct Application {
    pub config: AppConfig,
    pub glossary: Arc<Glossary>,
    pub events: EventsState,
}

impl Application {
    pub fn router(&self) -> Router {
        routes::router(
            &self.config.server.events_path,
            self.events.clone(),
            HealthState::new(self.glossary.len()),
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.config.server.bind_address, self.config.server.port)
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    config.validate()?;

    let glossary = Arc::new(Glossary::builtin());
    let api = WebApiClient::new(config.slack.bot_token.clone(), config.slack.api_base_url.clone());
    info!(
        event_name = "system.bootstrap.slack_client_ready",
        correlation_id = "bootstrap",
        api_base_url = %api.base_url(),
        glossary_terms = glossary.len(),
        "slack web api client configured"
    );

    let events = EventsState {
        verifier: Arc::new(SignatureVerifier::new(config.slack.signing_secret.clone())),
        dispatcher: Arc::new(EventDispatcher::new(Arc::new(api), Arc::clone(&glossary))),
        bot_token: config.slack.bot_token.clone(),
    };

    Ok(Application { config, glossary, events })
}
