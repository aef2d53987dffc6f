//! Contact form state and submission flow
//!
//! The form holds the four raw inputs and their live error messages. A submit
//! runs in two steps: [`ContactForm::begin_submit`] validates and marks the
//! form in flight, then [`ContactForm::complete_submit`] records how the mail
//! handoff went. Only a successful handoff clears the inputs.

use super::business::BusinessProfile;
use super::mailto::compose_inquiry;
use super::validation::{ContactField, FieldErrors, validate_field};

/// Shown after the mail client has been opened
pub const HANDOFF_SUCCESS_MESSAGE: &str = "Your email client has been opened with the message. Please send the email to complete your inquiry!";

/// Shown when opening the mail client failed
pub const HANDOFF_FAILURE_MESSAGE: &str =
    "There was an error processing your request. Please try calling us directly.";

/// A fully validated contact request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Why a submit did not start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("A submission is already in progress")]
    InFlight,

    #[error("check {}", .0.field_list())]
    Invalid(FieldErrors),
}

/// Failure to hand the composed message to the user's mail client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    #[error("Navigation to mail client failed: {0}")]
    Navigation(String),

    #[error("No browser window available")]
    NoWindow,
}

/// Opens a `mailto:` URI in whatever mail client the user has configured
pub trait MailHandoff {
    fn open(&self, uri: &str) -> Result<(), HandoffError>;
}

/// Result of a completed submit, used to pick the alert shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The mail client was opened with this URI and the form was cleared
    Sent(String),
    /// The handoff failed; the inputs are left as they were
    HandoffFailed(HandoffError),
}

impl SubmitOutcome {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent(_) => HANDOFF_SUCCESS_MESSAGE,
            SubmitOutcome::HandoffFailed(_) => HANDOFF_FAILURE_MESSAGE,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent(_))
    }
}

/// Live state of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
    errors: FieldErrors,
    in_flight: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    /// Updates one input and re-validates it
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        let outcome = validate_field(field, &value);
        *self.value_mut(field) = value;
        self.errors.record(field, outcome);
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validates every field, refreshing all error messages
    pub fn validate(&mut self) -> Result<ContactSubmission, FieldErrors> {
        for field in ContactField::ALL {
            let outcome = validate_field(field, self.value(field));
            self.errors.record(field, outcome);
        }

        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: clean_phone(&self.phone),
            message: self.message.clone(),
        })
    }

    /// Starts a submit: ignored while one is in flight, blocked by invalid input
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        if self.in_flight {
            return Err(SubmitBlocked::InFlight);
        }
        let submission = self.validate().map_err(SubmitBlocked::Invalid)?;
        self.in_flight = true;
        Ok(submission)
    }

    /// Finishes a submit started with [`ContactForm::begin_submit`]
    pub fn complete_submit(&mut self, outcome: &SubmitOutcome) {
        self.in_flight = false;
        if outcome.is_sent() {
            self.reset();
        }
    }

    /// Clears all inputs and errors
    pub fn reset(&mut self) {
        *self = Self {
            in_flight: self.in_flight,
            ..Self::default()
        };
    }

    /// Runs a whole submit against `handoff`
    pub fn submit<H: MailHandoff>(
        &mut self,
        profile: &BusinessProfile,
        handoff: &H,
    ) -> Result<SubmitOutcome, SubmitBlocked> {
        let submission = self.begin_submit()?;
        let uri = compose_inquiry(&submission, profile.email);
        let outcome = match handoff.open(&uri) {
            Ok(()) => SubmitOutcome::Sent(uri),
            Err(err) => SubmitOutcome::HandoffFailed(err),
        };
        self.complete_submit(&outcome);
        Ok(outcome)
    }
}

/// Removes whitespace and hyphens from a phone number
pub fn clean_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::business::SALON;
    use std::cell::RefCell;

    struct RecordingHandoff {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl RecordingHandoff {
        fn new(fail: bool) -> Self {
            Self {
                opened: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl MailHandoff for RecordingHandoff {
        fn open(&self, uri: &str) -> Result<(), HandoffError> {
            self.opened.borrow_mut().push(uri.to_string());
            if self.fail {
                Err(HandoffError::Navigation("no mail client".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Priya Sharma");
        form.set(ContactField::Email, "priya@example.com");
        form.set(ContactField::Phone, "+919112664990");
        form.set(ContactField::Message, "I would like a bridal trial next week.");
        form
    }

    #[test]
    fn test_set_validates_only_changed_field() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "A");

        assert_eq!(
            form.error(ContactField::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(form.error(ContactField::Email), None);

        form.set(ContactField::Name, "Al");
        assert_eq!(form.error(ContactField::Name), None);
    }

    #[test]
    fn test_validate_reports_every_invalid_field() {
        let mut form = ContactForm::new();
        let errors = form.validate().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ContactField::Phone), Some("Phone number is required"));
        assert_eq!(form.error(ContactField::Message), Some("Message is required"));
    }

    #[test]
    fn test_valid_form_produces_submission() {
        let mut form = filled_form();
        let submission = form.validate().unwrap();

        assert_eq!(submission.name, "Priya Sharma");
        assert_eq!(submission.phone, "+919112664990");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_invalid_submit_has_no_side_effect() {
        let mut form = filled_form();
        form.set(ContactField::Phone, "5112664990");
        let handoff = RecordingHandoff::new(false);

        let result = form.submit(&SALON, &handoff);

        assert!(matches!(result, Err(SubmitBlocked::Invalid(_))));
        assert!(handoff.opened.borrow().is_empty());
        assert_eq!(form.value(ContactField::Name), "Priya Sharma");
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut form = filled_form();
        let handoff = RecordingHandoff::new(false);

        let outcome = form.submit(&SALON, &handoff).unwrap();

        assert!(outcome.is_sent());
        assert_eq!(outcome.user_message(), HANDOFF_SUCCESS_MESSAGE);
        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(form.errors().is_empty());
        assert!(!form.is_in_flight());

        let opened = handoff.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("mailto:info@sevensalon.com?subject="));
    }

    #[test]
    fn test_failed_handoff_keeps_form() {
        let mut form = filled_form();
        let handoff = RecordingHandoff::new(true);

        let outcome = form.submit(&SALON, &handoff).unwrap();

        assert!(matches!(outcome, SubmitOutcome::HandoffFailed(_)));
        assert_eq!(outcome.user_message(), HANDOFF_FAILURE_MESSAGE);
        assert_eq!(form.value(ContactField::Email), "priya@example.com");
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut form = filled_form();

        assert!(form.begin_submit().is_ok());
        assert!(form.is_in_flight());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        form.complete_submit(&SubmitOutcome::Sent("mailto:x".to_string()));
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_clean_phone_strips_spaces_and_hyphens() {
        assert_eq!(clean_phone("+91 91126-64990"), "+919112664990");
        assert_eq!(clean_phone("9112664990"), "9112664990");
    }

    #[test]
    fn test_submit_blocked_display() {
        let mut errors = FieldErrors::new();
        errors.record(ContactField::Name, Err("Name is required"));
        assert_eq!(
            SubmitBlocked::Invalid(errors).to_string(),
            "check name"
        );
        assert_eq!(
            SubmitBlocked::InFlight.to_string(),
            "A submission is already in progress"
        );
    }
}
