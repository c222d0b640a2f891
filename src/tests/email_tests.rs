use crate::calculator::{DiskSpaceModel, Unit};
use crate::email::body::{make_email_body, DisplayUnits};
use crate::email::compose::{mailto_url, subject};
use crate::email::{compose, EmailRequest};
use crate::form::types::SpaceKind;
use crate::form::{apply, FormEdit, FormError, FormSettings, FormState};

fn sample_model() -> DiskSpaceModel {
    let mut model = DiskSpaceModel::default();
    model.set_total(1000.0);
    model.set_free(100.0);
    model.set_target(Some(20.0));
    model
}

fn filled_form() -> FormState {
    let settings = FormSettings::default();
    let edits = [
        FormEdit::SetSpace { field: SpaceKind::Total, text: "1000".to_string() },
        FormEdit::SetSpace { field: SpaceKind::Free, text: "100".to_string() },
        FormEdit::SetTarget { text: "20".to_string() },
    ];
    edits
        .into_iter()
        .fold(FormState::new(&settings), |form, edit| apply(&form, edit, &settings).unwrap())
}

fn request(server: &str, volume: &str, abbr: Option<&str>) -> EmailRequest {
    EmailRequest {
        server_name: server.to_string(),
        volume_name: volume.to_string(),
        client_abbreviation: abbr.map(str::to_string),
        cleanup_ran: false,
    }
}

#[test]
fn test_email_body_template() {
    let body = make_email_body("SRV01", "D:", &sample_model(), DisplayUnits::default(), false);
    let expected = "Hello,\n\n\
        We received an alert for low space on SRV01 Volume D:\n\n\
        Current volume details:\n\
        Total Capacity: 1000.00 GB\n\
        Total Used/Free: 900.00 GB / 100.00 GB\n\
        Percent Used/Free: 90.00% / 10.00%\n\n\
        Would you like us to run clean up tools or add additional space?\n\n\
        Adding or Clearing 125 GB will get the volume to 20.00% free space.\n\n\
        Please let us know how you would like to proceed.\n\n\
        Thank you";
    assert_eq!(body, expected);
}

#[test]
fn test_email_body_after_cleanup_in_mixed_units() {
    let units = DisplayUnits { total: Unit::Tb, free: Unit::Gb, used: Unit::Tb };
    let mut model = sample_model();
    model.set_total(2048.0);
    model.set_free(512.0);

    let body = make_email_body("SRV02", "E:", &model, units, true);
    assert!(body.contains("Total Capacity: 2.00 TB\n"));
    assert!(body.contains("Total Used/Free: 1.50 TB / 512.00 GB\n"));
    assert!(body.contains(
        "After running cleanup tools, we were unable to free enough space to clear the alert.\n\n"
    ));
    assert!(!body.contains("Would you like us"));
    assert!(body.contains("Adding or Clearing 0 GB will get the volume to 20.00% free space."));
}

#[test]
fn test_email_body_without_target() {
    let mut model = sample_model();
    model.set_target(None);
    let body = make_email_body("SRV01", "D:", &model, DisplayUnits::default(), false);
    assert!(body.contains("Adding or Clearing 0 GB will get the volume to 0.00% free space."));
}

#[test]
fn test_subject_line() {
    assert_eq!(subject("ACME", "SRV01", "D:"), "[ACME] Low Disk Space Alert on SRV01 Volume D:");
}

#[test]
fn test_mailto_url_encoding() {
    assert_eq!(
        mailto_url("", "[AB] Low disk", "Line one\nA & B = 50%"),
        "mailto:?subject=%5BAB%5D%20Low%20disk&body=Line%20one%0AA%20%26%20B%20%3D%2050%25"
    );
    assert_eq!(
        mailto_url("ops@example.com", "x", "a/b_c.d-e~f"),
        "mailto:ops@example.com?subject=x&body=a/b_c.d-e~f"
    );
}

#[test]
fn test_compose_full_draft() {
    let draft = compose(&filled_form(), &request(" SRV01 ", "D:", Some("ACME")), "", "").unwrap();
    assert_eq!(draft.subject, "[ACME] Low Disk Space Alert on SRV01 Volume D:");
    assert!(draft.body.starts_with("Hello,\n\nWe received an alert for low space on SRV01 Volume D:"));
    assert!(draft.mailto_url.starts_with("mailto:?subject=%5BACME%5D%20Low%20Disk%20Space"));
    assert!(draft.mailto_url.contains("&body=Hello%2C%0A%0A"));
}

#[test]
fn test_compose_uses_default_abbreviation() {
    let draft = compose(&filled_form(), &request("SRV01", "D:", Some("  ")), "", "DFLT").unwrap();
    assert!(draft.subject.starts_with("[DFLT] "));
}

#[test]
fn test_compose_requires_form_fields() {
    let settings = FormSettings::default();
    let form = apply(
        &FormState::new(&settings),
        FormEdit::SetSpace { field: SpaceKind::Total, text: "1000".to_string() },
        &settings,
    )
    .unwrap();

    let err = compose(&form, &request("SRV01", "D:", Some("ACME")), "", "").unwrap_err();
    assert_eq!(err, FormError::MissingFields);
}

#[test]
fn test_compose_requires_email_details() {
    let form = filled_form();
    for req in [
        request("", "D:", Some("ACME")),
        request("SRV01", "   ", Some("ACME")),
        request("SRV01", "D:", None),
    ] {
        let err = compose(&form, &req, "", "").unwrap_err();
        assert_eq!(err, FormError::MissingEmailDetails);
    }
}
