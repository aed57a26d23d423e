//! Contact-form validation and submission state.
//!
//! Flow: `Idle -> (validate) -> Idle with field errors | Submitting ->
//! Succeeded | Failed`. Validation runs synchronously before any network
//! call; a failed relay keeps the message so it can be resubmitted without
//! retyping.

use folio_types::ContactMessage;
use once_cell::sync::Lazy;
use regex::Regex;

// RFC-lite: anything@anything.anything, no whitespace or extra '@'.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// One invalid field with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Check all required fields, returning one error per invalid field.
pub fn validate(message: &ContactMessage) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if message.name.is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Name is required",
        });
    }

    if message.email.is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email is required",
        });
    } else if !EMAIL_PATTERN.is_match(&message.email) {
        errors.push(FieldError {
            field: "email",
            message: "Email is invalid",
        });
    }

    if message.subject.is_empty() {
        errors.push(FieldError {
            field: "subject",
            message: "Subject is required",
        });
    }

    if message.message.is_empty() {
        errors.push(FieldError {
            field: "message",
            message: "Message is required",
        });
    }

    errors
}

/// Where the form currently is in its submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed {
        reason: String,
    },
}

/// Owns the message being composed plus the submission phase.
#[derive(Debug, Default)]
pub struct ContactForm {
    message: ContactMessage,
    phase: FormPhase,
    errors: Vec<FieldError>,
}

impl ContactForm {
    pub fn new(message: ContactMessage) -> Self {
        Self {
            message,
            phase: FormPhase::Idle,
            errors: Vec::new(),
        }
    }

    /// Validate and, if clean, enter `Submitting`, handing the caller the
    /// message to relay. On validation failure the form stays `Idle` with
    /// field errors recorded; the next submit re-validates from scratch.
    pub fn begin_submit(&mut self) -> Option<&ContactMessage> {
        self.errors = validate(&self.message);
        if !self.errors.is_empty() {
            self.phase = FormPhase::Idle;
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(&self.message)
    }

    /// Record the relay outcome. Success clears the message; failure keeps
    /// it so the user can retry without retyping.
    pub fn complete(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.phase = FormPhase::Succeeded;
                self.message = ContactMessage::default();
            }
            Err(reason) => {
                self.phase = FormPhase::Failed { reason };
            }
        }
    }

    pub fn set_message(&mut self, message: ContactMessage) {
        self.message = message;
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site!".to_string(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert!(validate(&valid_message()).is_empty());
    }

    #[test]
    fn empty_email_yields_exactly_one_error() {
        let mut message = valid_message();
        message.email = String::new();

        let errors = validate(&message);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Email is required");
    }

    #[test]
    fn malformed_email_is_invalid_not_missing() {
        let mut message = valid_message();
        message.email = "not-an-email".to_string();

        let errors = validate(&message);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Email is invalid");
    }

    #[test]
    fn email_pattern_rejects_whitespace_and_missing_tld() {
        for bad in ["a b@example.com", "a@b", "a@@example.com", "@example.com"] {
            let mut message = valid_message();
            message.email = bad.to_string();
            assert!(
                !validate(&message).is_empty(),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn every_empty_field_reports_once() {
        let errors = validate(&ContactMessage::default());
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn invalid_submit_stays_idle_and_records_errors() {
        let mut form = ContactForm::new(ContactMessage::default());

        assert!(form.begin_submit().is_none());
        assert_eq!(form.phase(), &FormPhase::Idle);
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn valid_submit_enters_submitting_then_succeeds_and_clears() {
        let mut form = ContactForm::new(valid_message());

        assert!(form.begin_submit().is_some());
        assert_eq!(form.phase(), &FormPhase::Submitting);

        form.complete(Ok(()));
        assert_eq!(form.phase(), &FormPhase::Succeeded);
        assert_eq!(form.message(), &ContactMessage::default());
    }

    #[test]
    fn failed_submit_keeps_the_message_for_retry() {
        let mut form = ContactForm::new(valid_message());
        form.begin_submit();
        form.complete(Err("relay unreachable".to_string()));

        assert_eq!(
            form.phase(),
            &FormPhase::Failed {
                reason: "relay unreachable".to_string()
            }
        );
        assert_eq!(form.message(), &valid_message());

        // A retry goes straight back through validation.
        assert!(form.begin_submit().is_some());
        assert_eq!(form.phase(), &FormPhase::Submitting);
    }

    #[test]
    fn errors_clear_once_the_form_is_fixed() {
        let mut form = ContactForm::new(ContactMessage::default());
        form.begin_submit();
        assert!(!form.errors().is_empty());

        form.set_message(valid_message());
        assert!(form.begin_submit().is_some());
        assert!(form.errors().is_empty());
    }
}
