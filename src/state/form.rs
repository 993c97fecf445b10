//! Contact-form state and validation.
//!
//! Field rules: every field is required; the name and message carry length
//! caps; the email must have a plausible shape; the phone must be a local
//! number starting with `+380` or `0`. Whole-form validation requires every
//! field to pass, otherwise submission is withheld and the errors are shown
//! per field plus as an aggregate banner.
//!
//! Delivery is a `mailto:` URI handed to the user's mail client; there is no
//! backend. A `submitting` flag guards against overlapping submit attempts
//! until the transient success notice is dismissed.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::config::ContactConfig;

/// Character cap for the name field.
pub const NAME_MAX: usize = 100;

/// Character cap for the message field.
pub const MESSAGE_MAX: usize = 1000;

const SUCCESS_NOTICE: &str = "Thank you! Your mail client should open with the prepared message.";

/// The four form controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// One field-level validation failure with its display message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// A composed mail message, before URI encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Controlled state of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
    pub notice: Option<String>,
}

impl ContactFormState {
    /// Current validation message for one field.
    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    }

    /// Aggregate banner shown above the form while any field fails.
    pub fn banner(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some("Please correct the highlighted fields and try again.".to_owned())
        }
    }

    /// Validation gate plus duplicate-submission guard.
    ///
    /// Returns the draft to hand to the mail client when the form is clean
    /// and no submission is in flight; otherwise records the field errors
    /// (or silently refuses a duplicate attempt) and returns `None`.
    pub fn try_begin_submit(&mut self, contact: &ContactConfig) -> Option<MailDraft> {
        if self.submitting {
            return None;
        }

        self.errors = validate_all(&self.name, &self.email, &self.phone, &self.message);
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        self.notice = Some(SUCCESS_NOTICE.to_owned());
        Some(mail_draft(contact, self))
    }

    /// Dismiss the transient notice and re-arm the submit guard.
    pub fn reset_submission(&mut self) {
        self.submitting = false;
        self.notice = None;
    }
}

/// Compose the outgoing mail from the contact configuration and the form.
pub fn mail_draft(contact: &ContactConfig, form: &ContactFormState) -> MailDraft {
    let subject = format!("{}: {}", contact.subject_prefix, form.name.trim());
    let body = format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\n{}\n",
        form.name.trim(),
        form.email.trim(),
        form.phone.trim(),
        form.message.trim()
    );

    MailDraft {
        to: contact.mailbox.clone(),
        subject,
        body,
    }
}

/// Run every field rule and collect the failures.
pub fn validate_all(name: &str, email: &str, phone: &str, message: &str) -> Vec<FieldError> {
    let checks = [
        (Field::Name, validate_name(name)),
        (Field::Email, validate_email(email)),
        (Field::Phone, validate_phone(phone)),
        (Field::Message, validate_message(message)),
    ];

    checks
        .into_iter()
        .filter_map(|(field, result)| result.map(|message| FieldError { field, message }))
        .collect()
}

pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Please enter your name.".to_owned());
    }
    if trimmed.chars().count() > NAME_MAX {
        return Some(format!("The name must be at most {NAME_MAX} characters."));
    }
    None
}

pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Please enter your email address.".to_owned());
    }
    if !email_shape_ok(trimmed) {
        return Some("Please enter a valid email address.".to_owned());
    }
    None
}

pub fn validate_phone(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Some("Please enter your phone number.".to_owned());
    }
    if !phone_shape_ok(trimmed) {
        return Some("Please enter a phone number like +380 67 123 45 67 or 067 123 45 67.".to_owned());
    }
    None
}

pub fn validate_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Some("Please enter a message.".to_owned());
    }
    if trimmed.chars().count() > MESSAGE_MAX {
        return Some(format!("The message must be at most {MESSAGE_MAX} characters."));
    }
    None
}

/// Single `@`, non-empty local part, a dot inside the domain, no whitespace.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 {
        return false;
    }
    // dot must separate labels, not lead or trail the domain
    !domain.starts_with('.') && !domain.ends_with('.') && domain.contains('.')
}

/// Local number after separator stripping: `+380` or `0`, then nine digits.
fn phone_shape_ok(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    let rest = if let Some(rest) = digits.strip_prefix("+380") {
        rest
    } else if let Some(rest) = digits.strip_prefix('0') {
        rest
    } else {
        return false;
    };

    rest.len() == 9 && rest.chars().all(|c| c.is_ascii_digit())
}
