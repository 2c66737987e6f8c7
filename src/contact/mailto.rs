use crate::contact::ContactForm;
use crate::i18n::{MessageKey, Translator};

/// Percent-encode a mailto query value. Spaces become `%20`, not `+`.
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Build a `mailto:` URI with an encoded subject and body.
pub fn mailto_uri(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_component(subject),
        encode_component(body)
    )
}

/// The manual fallback for a form the relay could not deliver.
pub fn fallback_mailto(recipient: &str, t: &Translator, form: &ContactForm) -> String {
    let subject = t.format(MessageKey::ContactMailSubject, &[("name", &form.name)]);
    let body = format!(
        "{}: {}\n{}: {}\n\n{}",
        t.t(MessageKey::ContactFormName),
        form.name,
        t.t(MessageKey::ContactFormEmail),
        form.email,
        form.message
    );
    mailto_uri(recipient, &subject, &body)
}
