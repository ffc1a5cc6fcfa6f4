//! Contact form capture.
//!
//! The form collects four fields into a plain record. Submission is logged
//! and acknowledged with a toast; there is no backend yet, so the record
//! goes nowhere else. A real integration would post the serialized record
//! from `submit`.

use serde::Serialize;
use tracing::info;

/// One submitted contact request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Editable state behind the contact form fields
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Capture the current fields as a submission record, log it, and reset
    /// the form.
    pub fn submit(&mut self) -> ContactSubmission {
        let submission = ContactSubmission {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };

        match serde_json::to_string(&submission) {
            Ok(json) => info!(%json, "Contact form submitted"),
            Err(_) => info!(?submission, "Contact form submitted"),
        }

        self.reset();
        submission
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.message.is_empty()
    }
}
