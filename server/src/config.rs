//! Server and lead-relay configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_SITE_NAME: &str = "sternik-squad.vercel.app";
pub const DEFAULT_EMAIL_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_EMAIL_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

// =============================================================================
// SERVER
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the static site (HTML, CSS, wasm bundle).
    pub site_dir: PathBuf,
}

impl ServerConfig {
    /// Build listener config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `../site` next to this crate
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build listener config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_dir = lookup("SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site"));
        Ok(Self { port, site_dir })
    }
}

// =============================================================================
// LEAD RELAY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for RelayTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_EMAIL_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_EMAIL_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct LeadConfig {
    pub api_key: String,
    pub to_email: String,
    pub from_email: String,
    pub api_url: String,
    /// Site label printed in the notification heading.
    pub site_name: String,
    pub timeouts: RelayTimeouts,
}

impl std::fmt::Debug for LeadConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadConfig")
            .field("api_key", &"<redacted>")
            .field("to_email", &self.to_email)
            .field("from_email", &self.from_email)
            .field("api_url", &self.api_url)
            .field("site_name", &self.site_name)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl LeadConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Required:
    /// - `RESEND_API_KEY`
    /// - `LEAD_TO_EMAIL`
    /// - `LEAD_FROM_EMAIL`
    ///
    /// Optional:
    /// - `EMAIL_API_URL`: default Resend `/emails` endpoint
    /// - `LEAD_SITE_NAME`: default `sternik-squad.vercel.app`
    /// - `EMAIL_REQUEST_TIMEOUT_SECS`: default 15
    /// - `EMAIL_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for the first required variable that
    /// is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build relay config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for the first required variable that
    /// is unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { var })
        };
        let api_key = required("RESEND_API_KEY")?;
        let to_email = required("LEAD_TO_EMAIL")?;
        let from_email = required("LEAD_FROM_EMAIL")?;

        let api_url = lookup("EMAIL_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_owned());
        let site_name = lookup("LEAD_SITE_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned());
        let parse_secs = |var: &str, default: u64| {
            lookup(var)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };
        let timeouts = RelayTimeouts {
            request_secs: parse_secs("EMAIL_REQUEST_TIMEOUT_SECS", DEFAULT_EMAIL_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_secs("EMAIL_CONNECT_TIMEOUT_SECS", DEFAULT_EMAIL_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_key, to_email, from_email, api_url, site_name, timeouts })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
