//! Lead intake: `POST /api/lead`.
//!
//! Validate, compose, relay, answer. Exactly one relay attempt per accepted
//! submission; nothing is stored. Validation details stay in the logs and the
//! wire only ever sees `validation_error` or `server_error`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use lead::{ERROR_SERVER, ERROR_VALIDATION, LeadPayload, LeadResponse, ValidationError};
use uuid::Uuid;

use crate::relay::RelayError;
use crate::state::AppState;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Relay credentials or addresses are not configured.
    #[error("lead relay not configured")]
    Configuration,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl LeadError {
    /// Wire code. Configuration and relay failures collapse into one code so
    /// the caller cannot tell them apart.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => ERROR_VALIDATION,
            Self::Configuration | Self::Relay(_) => ERROR_SERVER,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        (self.status(), Json(LeadResponse::rejected(self.error_code()))).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/lead`: validate the form and relay it as an email.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Result<Json<LeadResponse>, LeadError> {
    let lead_id = Uuid::new_v4();
    let payload = LeadPayload::from_json_bytes(&body);

    let lead = lead::validate(&payload).inspect_err(|e| {
        tracing::debug!(%lead_id, error = %e, "lead rejected");
    })?;

    let Some(relay) = state.relay.as_ref() else {
        tracing::warn!(%lead_id, "lead relay not configured");
        return Err(LeadError::Configuration);
    };

    let email = lead::compose(&lead, relay.site_name());
    relay.send(&email).await.inspect_err(|e| {
        tracing::error!(%lead_id, error = %e, code = e.error_code(), "lead relay failed");
    })?;

    tracing::info!(%lead_id, project_type = %lead.project_type, "lead relayed");
    Ok(Json(LeadResponse::accepted()))
}

/// Any other method on `/api/lead`.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(LeadResponse::rejected(ERROR_VALIDATION)),
    )
        .into_response()
}

#[cfg(test)]
#[path = "intake_test.rs"]
mod tests;
