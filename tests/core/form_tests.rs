//! Tests for contact form capture

use farmsite::form::{ContactForm, ContactSubmission};

#[test]
fn test_submit_captures_all_four_fields() {
    let mut form = ContactForm {
        name: "Ravi Patil".to_string(),
        phone: "+91 90114 63179".to_string(),
        email: "ravi@example.com".to_string(),
        message: "One liter of milk and 500g ghee, weekly.".to_string(),
    };

    let submission = form.submit();

    assert_eq!(
        submission,
        ContactSubmission {
            name: "Ravi Patil".to_string(),
            phone: "+91 90114 63179".to_string(),
            email: "ravi@example.com".to_string(),
            message: "One liter of milk and 500g ghee, weekly.".to_string(),
        }
    );
}

#[test]
fn test_submit_resets_the_form() {
    let mut form = ContactForm {
        name: "Asha".to_string(),
        ..ContactForm::default()
    };
    assert!(!form.is_empty());

    form.submit();
    assert!(form.is_empty());
}

#[test]
fn test_empty_form_submits_an_empty_record() {
    // No validation layer yet: the capture is faithful, even when blank.
    let mut form = ContactForm::default();
    let submission = form.submit();
    assert_eq!(submission, ContactSubmission::default());
}

#[test]
fn test_submission_serializes_for_the_backend_seam() {
    let submission = ContactSubmission {
        name: "Asha".to_string(),
        phone: "9011463179".to_string(),
        email: String::new(),
        message: "विचारपूस".to_string(),
    };

    let json = serde_json::to_string(&submission).unwrap();
    assert!(json.contains("\"name\":\"Asha\""));
    assert!(json.contains("विचारपूस"));
}
