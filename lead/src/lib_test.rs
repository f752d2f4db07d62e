use super::*;
use serde_json::json;

fn valid_payload() -> LeadPayload {
    LeadPayload {
        name: "Anna Nowak".into(),
        email: "anna@example.pl".into(),
        phone: String::new(),
        project_type: "Dom jednorodzinny".into(),
        area: String::new(),
        message: "Prosze o wycene.".into(),
        rodo_consent: true,
    }
}

// =============================================================================
// is_valid_email
// =============================================================================

#[test]
fn email_accepts_simple_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("jan.kowalski+lead@firma.com.pl"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("noat.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@.b"));
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_accepts_complete_payload() {
    let lead = validate(&valid_payload()).unwrap();
    assert_eq!(lead.name, "Anna Nowak");
    assert_eq!(lead.phone, None);
    assert_eq!(lead.area, None);
}

#[test]
fn validate_trims_fields() {
    let mut payload = valid_payload();
    payload.name = "  Anna  ".into();
    payload.phone = " 600 100 200 ".into();
    let lead = validate(&payload).unwrap();
    assert_eq!(lead.name, "Anna");
    assert_eq!(lead.phone.as_deref(), Some("600 100 200"));
}

#[test]
fn validate_rejects_each_missing_required_field() {
    let cases: [(Field, fn(&mut LeadPayload)); 4] = [
        (Field::Name, |p| p.name = "   ".into()),
        (Field::Email, |p| p.email.clear()),
        (Field::ProjectType, |p| p.project_type.clear()),
        (Field::Message, |p| p.message = "\n".into()),
    ];
    for (field, blank) in cases {
        let mut payload = valid_payload();
        blank(&mut payload);
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.errors, vec![FieldError { field, problem: Problem::Missing }], "field {field:?}");
    }
}

#[test]
fn validate_rejects_missing_consent() {
    let mut payload = valid_payload();
    payload.rodo_consent = false;
    let err = validate(&payload).unwrap_err();
    assert!(err.has(Field::RodoConsent));
    assert_eq!(err.errors[0].problem, Problem::ConsentRequired);
}

#[test]
fn validate_rejects_malformed_email() {
    for bad in ["a@b", "noat.com"] {
        let mut payload = valid_payload();
        payload.email = bad.into();
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.errors, vec![FieldError { field: Field::Email, problem: Problem::Malformed }]);
    }
}

#[test]
fn validate_reports_fields_in_form_order() {
    let err = validate(&LeadPayload::default()).unwrap_err();
    let fields: Vec<Field> = err.errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Name, Field::Email, Field::ProjectType, Field::Message, Field::RodoConsent]);
    assert_eq!(err.error_code(), ERROR_VALIDATION);
}

#[test]
fn validation_error_display_lists_fields() {
    let mut payload = valid_payload();
    payload.email = "x".into();
    payload.rodo_consent = false;
    let err = validate(&payload).unwrap_err();
    assert_eq!(err.to_string(), "lead rejected: email malformed, rodoConsent consent required");
}

// =============================================================================
// LeadPayload parsing
// =============================================================================

#[test]
fn from_json_bytes_reads_camel_case_fields() {
    let raw = br#"{"name":"Anna","email":"a@b.pl","projectType":"Remont","message":"hi","rodoConsent":true}"#;
    let payload = LeadPayload::from_json_bytes(raw);
    assert_eq!(payload.project_type, "Remont");
    assert!(payload.rodo_consent);
    assert!(validate(&payload).is_ok());
}

#[test]
fn from_json_bytes_treats_garbage_as_empty() {
    assert_eq!(LeadPayload::from_json_bytes(b"not json"), LeadPayload::default());
    assert_eq!(LeadPayload::from_json_bytes(b"[1,2]"), LeadPayload::default());
    assert_eq!(LeadPayload::from_json_bytes(b""), LeadPayload::default());
}

#[test]
fn from_value_requires_literal_true_consent() {
    for consent in [json!("true"), json!(1), json!(null)] {
        let payload = LeadPayload::from_value(&json!({ "rodoConsent": consent }));
        assert!(!payload.rodo_consent, "consent {consent} should not count");
    }
}

#[test]
fn from_value_coerces_scalars_to_text() {
    let payload = LeadPayload::from_value(&json!({ "area": 120, "phone": 0, "name": null, "message": false }));
    assert_eq!(payload.area, "120");
    assert_eq!(payload.phone, "");
    assert_eq!(payload.name, "");
    assert_eq!(payload.message, "");
}

// =============================================================================
// LeadResponse
// =============================================================================

#[test]
fn response_serializes_without_error_on_success() {
    let body = serde_json::to_value(LeadResponse::accepted()).unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[test]
fn response_serializes_error_code() {
    let body = serde_json::to_value(LeadResponse::rejected(ERROR_SERVER)).unwrap();
    assert_eq!(body, json!({ "ok": false, "error": "server_error" }));
}

#[test]
fn payload_serializes_camel_case_for_the_form() {
    let body = serde_json::to_value(valid_payload()).unwrap();
    assert_eq!(body["projectType"], "Dom jednorodzinny");
    assert_eq!(body["rodoConsent"], true);
}
