//! Rendering a validated lead into the notification email.
//!
//! The same structured message is rendered twice: as plain text, where the
//! visitor's words go through untouched, and as HTML, where every value is
//! escaped first so nothing the visitor typed can become markup.

use crate::Lead;

/// Placeholder printed for optional fields the visitor left blank.
const BLANK: &str = "-";

/// Subject plus both renderings of one lead notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the notification for `lead`. `source` names the site the form
/// lives on and appears in the heading of both bodies.
#[must_use]
pub fn compose(lead: &Lead, source: &str) -> LeadEmail {
    let phone = lead.phone.as_deref().unwrap_or(BLANK);
    let area = lead.area.as_deref().unwrap_or(BLANK);
    let heading = format!("Nowe zapytanie ze strony {source}");

    let rows = [
        ("Imię i nazwisko", lead.name.as_str()),
        ("E-mail", lead.email.as_str()),
        ("Telefon", phone),
        ("Typ inwestycji", lead.project_type.as_str()),
        ("Orientacyjna powierzchnia", area),
    ];

    let mut text = vec![heading.clone()];
    text.extend(rows.iter().map(|(label, value)| format!("{label}: {value}")));
    text.push(String::new());
    text.push("Wiadomość:".to_owned());
    text.push(lead.message.clone());

    let mut html = vec![format!("<h2>{}</h2>", escape_html(&heading))];
    html.extend(
        rows.iter()
            .map(|(label, value)| format!("<p><strong>{label}:</strong> {}</p>", escape_html(value))),
    );
    html.push(format!(
        "<p><strong>Wiadomość:</strong><br>{}</p>",
        escape_html(&lead.message).replace('\n', "<br>")
    ));

    LeadEmail { subject: format!("Nowy lead - {}", lead.name), text: text.join("\n"), html: html.join("\n") }
}

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;
