//! Lead form state.
//!
//! The form validates with the same rules as the intake endpoint, refuses to
//! submit twice at once, and turns the endpoint's answer into the message
//! shown under the form. Configuration and relay failures look the same to
//! the visitor: a fallback pointing at a contact address.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use lead::{Field, FieldError, LeadPayload, LeadResponse, Problem, ValidationError};

/// Address shown when the form cannot be delivered and the markup does not
/// provide one.
pub const DEFAULT_FALLBACK_CONTACT: &str = "kontakt@sternik-squad.pl";

pub const SUCCESS_MESSAGE: &str = "Dziękujemy! Odezwiemy się najszybciej, jak to możliwe.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What the host should do after the visitor presses submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Post the payload to the endpoint.
    Send,
    /// Show field errors; nothing is sent.
    Invalid(ValidationError),
    /// A submission is already in flight.
    Busy,
}

/// The endpoint's answer as seen by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Failed,
}

impl SubmitOutcome {
    /// Success needs both a 2xx status and `{ "ok": true }`.
    #[must_use]
    pub fn from_response(http_ok: bool, body: Option<&LeadResponse>) -> Self {
        match body {
            Some(resp) if http_ok && resp.ok => Self::Accepted,
            _ => Self::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    status: FormStatus,
    errors: Vec<FieldError>,
    fallback_contact: String,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new(None)
    }
}

impl LeadForm {
    #[must_use]
    pub fn new(fallback_contact: Option<String>) -> Self {
        let fallback_contact = fallback_contact
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_CONTACT.to_owned());
        Self { status: FormStatus::Idle, errors: Vec::new(), fallback_contact }
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Visitor pressed submit with `payload`.
    pub fn begin_submit(&mut self, payload: &LeadPayload) -> SubmitDecision {
        if self.status == FormStatus::Submitting {
            return SubmitDecision::Busy;
        }
        match lead::validate(payload) {
            Ok(_) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                SubmitDecision::Send
            }
            Err(e) => {
                self.errors.clone_from(&e.errors);
                self.status = FormStatus::Idle;
                SubmitDecision::Invalid(e)
            }
        }
    }

    /// The request finished. Returns `true` when the form should be reset.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> bool {
        match outcome {
            SubmitOutcome::Accepted => {
                self.status = FormStatus::Succeeded;
                true
            }
            SubmitOutcome::Failed => {
                self.status = FormStatus::Failed;
                false
            }
        }
    }

    /// Status line under the form, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.status {
            FormStatus::Idle if !self.errors.is_empty() => Some("Popraw zaznaczone pola formularza.".to_owned()),
            FormStatus::Idle => None,
            FormStatus::Submitting => Some("Wysyłanie...".to_owned()),
            FormStatus::Succeeded => Some(SUCCESS_MESSAGE.to_owned()),
            FormStatus::Failed => Some(format!(
                "Nie udało się wysłać formularza. Napisz do nas bezpośrednio: {}",
                self.fallback_contact
            )),
        }
    }

    /// Inline message for `field`, if it was rejected.
    #[must_use]
    pub fn field_message(&self, field: Field) -> Option<&'static str> {
        let error = self.errors.iter().find(|e| e.field == field)?;
        Some(match (error.field, error.problem) {
            (Field::Email, Problem::Malformed) => "Podaj poprawny adres e-mail.",
            (Field::RodoConsent, _) => "Zgoda na przetwarzanie danych jest wymagana.",
            (Field::Name, _) => "Podaj imię i nazwisko.",
            (Field::Email, _) => "Podaj adres e-mail.",
            (Field::ProjectType, _) => "Wybierz typ inwestycji.",
            (Field::Message, _) => "Opisz krótko swój projekt.",
        })
    }
}
