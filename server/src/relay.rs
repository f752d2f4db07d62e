//! Lead relay: hands a composed notification to the transactional email API.
//!
//! DESIGN
//! ======
//! The handler talks to the [`LeadRelay`] trait so tests can swap in a mock.
//! [`ResendRelay`] is the production implementation: one `POST` with a bearer
//! token and a `{from, to, subject, text, html}` JSON body. Any non-2xx status
//! or transport failure is a [`RelayError`]; there is no retry.

use std::time::Duration;

use lead::LeadEmail;
use serde::Serialize;

use crate::config::LeadConfig;

/// Upper bound on the provider error body kept for logging.
const ERROR_BODY_LIMIT: usize = 512;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("email API request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("email API response error: status {status}")]
    Rejected { status: u16, body: String },
}

impl RelayError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Transport(_) => "E_RELAY_TRANSPORT",
            Self::Rejected { .. } => "E_RELAY_REJECTED",
        }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Something that can deliver a lead notification.
#[async_trait::async_trait]
pub trait LeadRelay: Send + Sync {
    /// Deliver one notification. Called at most once per submission.
    async fn send(&self, email: &LeadEmail) -> Result<(), RelayError>;

    /// Site label printed in the notification heading.
    fn site_name(&self) -> &str;
}

// =============================================================================
// RESEND
// =============================================================================

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Resend-compatible HTTP relay.
pub struct ResendRelay {
    http: reqwest::Client,
    config: LeadConfig,
}

impl ResendRelay {
    /// Build a relay from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: LeadConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait]
impl LeadRelay for ResendRelay {
    async fn send(&self, email: &LeadEmail) -> Result<(), RelayError> {
        let body = SendEmailRequest {
            from: &self.config.from_email,
            to: &self.config.to_email,
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
        };
        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > ERROR_BODY_LIMIT {
            let cut = (0..=ERROR_BODY_LIMIT)
                .rev()
                .find(|&i| body.is_char_boundary(i))
                .unwrap_or(0);
            body.truncate(cut);
        }
        Err(RelayError::Rejected { status: status.as_u16(), body })
    }

    fn site_name(&self) -> &str {
        &self.config.site_name
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
