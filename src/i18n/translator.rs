//! Translator: resolved locale plus its table, passed down explicitly.
//!
//! A `Translator` is created once per request from the resolved [`Locale`]
//! and handed to everything that renders text. Nothing reads the active
//! locale from global state.

use crate::i18n::{Locale, LocaleStrings, MessageKey};
use tracing::warn;

/// Translation access for one resolved locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    locale: Locale,
    strings: &'static LocaleStrings,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            strings: locale.strings(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a message.
    ///
    /// Every key exists in every table, so the only defect left is an empty
    /// translation. That is logged and the English string is returned instead.
    pub fn t(&self, key: MessageKey) -> &'static str {
        let value = self.strings.get(key);
        if !value.trim().is_empty() || self.locale.is_default() {
            return value;
        }

        warn!(
            locale = %self.locale,
            key = key.path(),
            "Empty translation, falling back to English"
        );
        Locale::DEFAULT.strings().get(key)
    }

    /// Translate a message and substitute `{placeholder}` values.
    pub fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

impl From<Locale> for Translator {
    fn from(locale: Locale) -> Self {
        Self::new(locale)
    }
}
