//! Locale type: the closed set of display languages the site is served in.
//!
//! Every locale owns a URL path segment (`/en`, `/rom`, `/ru`) and one
//! complete translation table. English is the default locale and the
//! fallback for any path that does not name a supported locale.

use crate::i18n::strings::{ENGLISH_STRINGS, ROMANIAN_STRINGS, RUSSIAN_STRINGS};
use crate::i18n::LocaleStrings;
use serde::Serialize;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Rom,
    Ru,
}

impl Locale {
    /// Every supported locale, in language-switcher order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Rom, Locale::Ru];

    /// Locale used for `/` and for every unrecognized path.
    pub const DEFAULT: Locale = Locale::En;

    /// Look up a locale by its path segment (`"en"`, `"rom"`, `"ru"`).
    ///
    /// Matching is exact: `"EN"` or `"ro"` are not locale segments.
    pub fn from_segment(segment: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.segment() == segment)
    }

    /// Path segment identifying this locale in URLs.
    pub fn segment(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Rom => "rom",
            Locale::Ru => "ru",
        }
    }

    /// Absolute path of this locale's page, e.g. `/rom`.
    pub fn path(&self) -> String {
        format!("/{}", self.segment())
    }

    /// BCP 47 tag for the `<html lang>` attribute.
    ///
    /// The Romanian path segment is `rom` but the language tag is `ro`.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Rom => "ro",
            Locale::Ru => "ru",
        }
    }

    /// Language name in its own language, for the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Rom => "Română",
            Locale::Ru => "Русский",
        }
    }

    /// Short switcher label.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Rom => "RO",
            Locale::Ru => "RU",
        }
    }

    /// The translation table for this locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        match self {
            Locale::En => &ENGLISH_STRINGS,
            Locale::Rom => &ROMANIAN_STRINGS,
            Locale::Ru => &RUSSIAN_STRINGS,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segment_known() {
        assert_eq!(Locale::from_segment("en"), Some(Locale::En));
        assert_eq!(Locale::from_segment("rom"), Some(Locale::Rom));
        assert_eq!(Locale::from_segment("ru"), Some(Locale::Ru));
    }

    #[test]
    fn test_from_segment_unknown() {
        assert_eq!(Locale::from_segment("xx"), None);
        assert_eq!(Locale::from_segment(""), None);
        assert_eq!(Locale::from_segment("ro"), None);
        assert_eq!(Locale::from_segment("EN"), None);
    }

    #[test]
    fn test_path_round_trips_through_segment() {
        for locale in Locale::ALL {
            let path = locale.path();
            assert_eq!(Locale::from_segment(&path[1..]), Some(locale));
        }
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert!(Locale::En.is_default());
        assert!(!Locale::Ru.is_default());
    }

    #[test]
    fn test_html_lang_for_romanian() {
        assert_eq!(Locale::Rom.segment(), "rom");
        assert_eq!(Locale::Rom.html_lang(), "ro");
    }

    #[test]
    fn test_display_uses_segment() {
        assert_eq!(Locale::Rom.to_string(), "rom");
    }

    #[test]
    fn test_strings_differ_per_locale() {
        assert_ne!(Locale::En.strings().nav_home, Locale::Ru.strings().nav_home);
        assert_ne!(Locale::En.strings().nav_home, Locale::Rom.strings().nav_home);
    }

    #[test]
    fn test_serializes_as_segment() {
        assert_eq!(serde_json::to_string(&Locale::Rom).unwrap(), "\"rom\"");
    }
}
