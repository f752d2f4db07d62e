//! Shared lead model for the contact form and the intake endpoint.
//!
//! This crate owns the wire shape of a lead submission and the rules that
//! decide whether it is acceptable. Both the browser form (`motion`, under the
//! `hydrate` feature) and the `server` intake handler validate through
//! [`validate`], so the field-level errors a visitor sees and the
//! `validation_error` the endpoint returns can never disagree.

pub mod email;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use email::{LeadEmail, compose, escape_html};

/// Wire code returned when the submission fails validation.
pub const ERROR_VALIDATION: &str = "validation_error";

/// Wire code returned for configuration and relay failures.
pub const ERROR_SERVER: &str = "server_error";

// =============================================================================
// PAYLOAD
// =============================================================================

/// Raw form submission as it travels over the wire.
///
/// Field names follow the form's `camelCase` JSON. Optional fields are kept as
/// plain strings; emptiness is decided by [`validate`], not by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub area: String,
    pub message: String,
    pub rodo_consent: bool,
}

impl LeadPayload {
    /// Parse a request body leniently.
    ///
    /// Anything that is not a JSON object becomes an empty payload, and scalar
    /// values are coerced to text, so a malformed body always surfaces as a
    /// validation failure instead of a transport error. Consent only counts
    /// when it is the literal boolean `true`.
    #[must_use]
    pub fn from_json_bytes(raw: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    /// Build a payload from an already-parsed JSON value.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        let text = |key: &str| map.get(key).map(coerce_text).unwrap_or_default();
        Self {
            name: text("name"),
            email: text("email"),
            phone: text("phone"),
            project_type: text("projectType"),
            area: text("area"),
            message: text("message"),
            rodo_consent: map.get("rodoConsent") == Some(&Value::Bool(true)),
        }
    }
}

/// Text form of a JSON scalar. Falsy values (`null`, `false`, `0`, `""`)
/// collapse to the empty string.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_owned(),
        Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    ProjectType,
    Message,
    RodoConsent,
}

impl Field {
    /// Every validated field, in form order.
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::ProjectType, Self::Message, Self::RodoConsent];

    /// The field's name in the submitted JSON and in the form markup.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::ProjectType => "projectType",
            Self::Message => "message",
            Self::RodoConsent => "rodoConsent",
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Required text is empty after trimming.
    Missing,
    /// The email address does not have a `local@domain.tld` shape.
    Malformed,
    /// The privacy consent box was not ticked.
    ConsentRequired,
}

/// One rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

/// A submission that failed one or more field rules. Fields are reported in
/// form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lead rejected: {}", describe(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Whether the given field is among the rejected ones.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Stable wire code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        ERROR_VALIDATION
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| {
            let why = match e.problem {
                Problem::Missing => "missing",
                Problem::Malformed => "malformed",
                Problem::ConsentRequired => "consent required",
            };
            format!("{} {why}", e.field.as_str())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// A submission that passed validation. All text is trimmed; empty optional
/// fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: String,
    pub area: Option<String>,
    pub message: String,
}

/// Check a payload against the lead rules.
///
/// # Errors
///
/// Returns every failing field when any required field is blank, the email
/// is malformed, or consent is not given.
pub fn validate(payload: &LeadPayload) -> Result<Lead, ValidationError> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    let project_type = payload.project_type.trim();
    let message = payload.message.trim();

    let mut errors = Vec::new();
    for (field, value) in [(Field::Name, name), (Field::Email, email)] {
        if value.is_empty() {
            errors.push(FieldError { field, problem: Problem::Missing });
        }
    }
    if !email.is_empty() && !is_valid_email(email) {
        errors.push(FieldError { field: Field::Email, problem: Problem::Malformed });
    }
    for (field, value) in [(Field::ProjectType, project_type), (Field::Message, message)] {
        if value.is_empty() {
            errors.push(FieldError { field, problem: Problem::Missing });
        }
    }
    if !payload.rodo_consent {
        errors.push(FieldError { field: Field::RodoConsent, problem: Problem::ConsentRequired });
    }

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    Ok(Lead {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: non_empty(&payload.phone),
        project_type: project_type.to_owned(),
        area: non_empty(&payload.area),
        message: message.to_owned(),
    })
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// `local@domain.tld`: exactly one `@`, no whitespace, a non-empty local
/// part, and a dot inside the domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// =============================================================================
// RESPONSE
// =============================================================================

/// JSON body returned by the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LeadResponse {
    #[must_use]
    pub fn accepted() -> Self {
        Self { ok: true, error: None }
    }

    #[must_use]
    pub fn rejected(code: &str) -> Self {
        Self { ok: false, error: Some(code.to_owned()) }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
