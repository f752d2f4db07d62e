//! Lead form wiring: read fields, validate through [`LeadForm`], post to the
//! intake endpoint and render the outcome.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use lead::{Field, LeadPayload, LeadResponse};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::dom;
use crate::form::{FormStatus, LeadForm, SubmitDecision, SubmitOutcome};

const LEAD_ENDPOINT: &str = "/api/lead";

/// Bind the `[data-lead-form]` form, if the page has one.
pub fn setup(document: &Document) {
    let Some(form) = dom::one::<HtmlFormElement>(document, "[data-lead-form]") else {
        return;
    };
    let state = Rc::new(RefCell::new(LeadForm::new(form.get_attribute("data-fallback-email"))));

    let el = form.clone();
    dom::listen(&form, "submit", false, move |event| {
        event.prevent_default();
        let payload = read_payload(&el);
        let decision = state.borrow_mut().begin_submit(&payload);
        render(&el, &state.borrow());
        if decision != SubmitDecision::Send {
            return;
        }

        let el = el.clone();
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post(&payload).await;
            let reset = state.borrow_mut().finish(outcome);
            if reset {
                el.reset();
            }
            render(&el, &state.borrow());
        });
    });
}

async fn post(payload: &LeadPayload) -> SubmitOutcome {
    let request = match Request::post(LEAD_ENDPOINT).json(payload) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("lead request build failed: {e}");
            return SubmitOutcome::Failed;
        }
    };
    match request.send().await {
        Ok(resp) => {
            let http_ok = resp.ok();
            let body = resp.json::<LeadResponse>().await.ok();
            SubmitOutcome::from_response(http_ok, body.as_ref())
        }
        Err(e) => {
            log::warn!("lead request failed: {e}");
            SubmitOutcome::Failed
        }
    }
}

fn read_payload(form: &HtmlFormElement) -> LeadPayload {
    LeadPayload {
        name: value(form, "name"),
        email: value(form, "email"),
        phone: value(form, "phone"),
        project_type: value(form, "projectType"),
        area: value(form, "area"),
        message: value(form, "message"),
        rodo_consent: control(form, "rodoConsent")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked()),
    }
}

fn control(form: &HtmlFormElement, name: &str) -> Option<Element> {
    dom::one_in(form, &format!("[name=\"{name}\"]"))
}

fn value(form: &HtmlFormElement, name: &str) -> String {
    let Some(el) = control(form, name) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn render(form: &HtmlFormElement, state: &LeadForm) {
    if let Some(button) = dom::one_in::<HtmlButtonElement>(form, "button[type=\"submit\"]") {
        button.set_disabled(state.status() == FormStatus::Submitting);
    }
    if let Some(status) = dom::one_in::<Element>(form, "[data-form-status]") {
        status.set_text_content(state.message().as_deref());
        let _ = status.set_attribute("data-state", status_name(state.status()));
    }
    for field in Field::ALL {
        let message = state.field_message(field);
        if let Some(slot) = dom::one_in::<Element>(form, &format!("[data-error-for=\"{}\"]", field.as_str())) {
            slot.set_text_content(message);
        }
        if let Some(input) = control(form, field.as_str()) {
            let _ = input.set_attribute("aria-invalid", if message.is_some() { "true" } else { "false" });
        }
    }
}

fn status_name(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "idle",
        FormStatus::Submitting => "submitting",
        FormStatus::Succeeded => "success",
        FormStatus::Failed => "error",
    }
}
