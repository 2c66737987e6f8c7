use crate::i18n::MessageKey;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Contact form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field validation errors, as message keys for the active locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<MessageKey>,
    pub email: Option<MessageKey>,
    pub message: Option<MessageKey>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [self.name, self.email, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Loose email syntax check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
    regex.is_match(email)
}

impl ContactForm {
    /// Check every field and collect all errors.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(MessageKey::ContactFormErrorsNameReq);
        }

        if self.email.trim().is_empty() {
            errors.email = Some(MessageKey::ContactFormErrorsEmailReq);
        } else if !is_valid_email(&self.email) {
            errors.email = Some(MessageKey::ContactFormErrorsEmailInv);
        }

        if self.message.trim().is_empty() {
            errors.message = Some(MessageKey::ContactFormErrorsMsgReq);
        }

        errors
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}
