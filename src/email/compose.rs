use super::body::{make_email_body, DisplayUnits};
use crate::form::{FormError, FormState};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Everything except ASCII alphanumerics and `_.-~/` is escaped, so spaces
/// become `%20` rather than `+` and mail clients keep line breaks.
const QUERY_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'_').remove(b'.').remove(b'-').remove(b'~').remove(b'/');

/// Recipients keep their `@` and list separators readable.
const RECIPIENT_ENCODE_SET: &AsciiSet = &QUERY_ENCODE_SET.remove(b'@').remove(b',');

/// Request body for POST /api/email.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct EmailRequest {
    pub server_name: String,
    pub volume_name: String,
    /// Falls back to the configured CLIENT_ABBREVIATION when absent.
    #[serde(default)]
    pub client_abbreviation: Option<String>,
    #[serde(default)]
    pub cleanup_ran: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct EmailDraft {
    pub subject: String,
    pub body: String,
    pub mailto_url: String,
}

pub(crate) fn subject(client_abbreviation: &str, server_name: &str, volume_name: &str) -> String {
    format!("[{client_abbreviation}] Low Disk Space Alert on {server_name} Volume {volume_name}")
}

pub(crate) fn mailto_url(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        utf8_percent_encode(to, RECIPIENT_ENCODE_SET),
        utf8_percent_encode(subject, QUERY_ENCODE_SET),
        utf8_percent_encode(body, QUERY_ENCODE_SET),
    )
}

/// Build the alert email for the current form.
///
/// All four form fields must be filled in, and the request must name a
/// server, a volume and (directly or via the default) a client.
pub(crate) fn compose(
    form: &FormState,
    req: &EmailRequest,
    mail_to: &str,
    default_abbreviation: &str,
) -> Result<EmailDraft, FormError> {
    let required = [&form.total.text, &form.free.text, &form.used.text, &form.target_text];
    if required.iter().any(|text| text.trim().is_empty()) {
        return Err(FormError::MissingFields);
    }

    let server_name = req.server_name.trim();
    let volume_name = req.volume_name.trim();
    let abbreviation = req
        .client_abbreviation
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_abbreviation.trim());

    if server_name.is_empty() || volume_name.is_empty() || abbreviation.is_empty() {
        return Err(FormError::MissingEmailDetails);
    }

    let units = DisplayUnits { total: form.total.unit, free: form.free.unit, used: form.used.unit };
    let body = make_email_body(server_name, volume_name, &form.model, units, req.cleanup_ran);
    let subject_line = subject(abbreviation, server_name, volume_name);
    let url = mailto_url(mail_to, &subject_line, &body);

    Ok(EmailDraft { subject: subject_line, body, mailto_url: url })
}
