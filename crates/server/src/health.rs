use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    glossary_terms: usize,
}

impl HealthState {
    pub fn new(glossary_terms: usize) -> Self {
        Self { glossary_terms }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub glossary: HealthCheck,
    pub checked_at: String,
}

pub fn router(state: HealthState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let glossary = glossary_check(state.glossary_terms);
    let ready = glossary.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "yougo-server runtime initialized".to_string(),
        },
        glossary,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn glossary_check(terms: usize) -> HealthCheck {
    if terms == 0 {
        HealthCheck { status: "degraded", detail: "glossary has no terms".to_string() }
    } else {
        HealthCheck { status: "ready", detail: format!("{terms} glossary terms loaded") }
    }
}
