//! Contact form: validation, relay delivery, and the mailto fallback.
//!
//! A valid form triggers exactly one relay attempt. When the relay fails the
//! visitor still sees the success panel, together with a `mailto:` link that
//! carries the same message.

mod form;
mod mailto;
mod relay;

pub use form::{is_valid_email, ContactForm, FieldErrors};
pub use mailto::{fallback_mailto, mailto_uri};
pub use relay::{ContactRelay, RelayError};

use crate::i18n::Translator;
use tracing::{info, warn};

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The relay accepted the message.
    Delivered,
    /// The relay failed; the visitor can send this mailto instead.
    Fallback { mailto: String },
}

impl Submission {
    /// Whether the visitor is shown the success panel.
    pub fn reports_success(&self) -> bool {
        !matches!(self, Submission::Invalid(_))
    }
}

/// Validate and deliver a contact form.
pub async fn submit(relay: &ContactRelay, t: &Translator, form: &ContactForm) -> Submission {
    let errors = form.validate();
    if !errors.is_empty() {
        info!(errors = errors.count(), "Contact form rejected by validation");
        return Submission::Invalid(errors);
    }

    let form = form.trimmed();
    match relay.send(&form).await {
        Ok(()) => {
            info!(locale = %t.locale(), "Contact message delivered via relay");
            Submission::Delivered
        }
        Err(e) => {
            warn!("Contact relay failed, offering mailto fallback: {}", e);
            Submission::Fallback {
                mailto: fallback_mailto(relay.recipient(), t, &form),
            }
        }
    }
}
