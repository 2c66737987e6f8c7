//! Translation table validation.
//!
//! The compiler guarantees every locale defines every key. This validator
//! covers what it cannot: empty strings and `{placeholder}` sets that drift
//! from the English table.

use crate::i18n::{Locale, MessageKey};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors (empty translations)
    pub errors: Vec<String>,

    /// Non-critical warnings (placeholder drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate one locale's table against the English table.
    pub fn validate_locale(locale: Locale) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = Locale::DEFAULT.strings();
        let strings = locale.strings();

        for key in MessageKey::ALL {
            let value = strings.get(*key);
            if value.trim().is_empty() {
                report
                    .errors
                    .push(format!("[{}] {} is empty", locale, key.path()));
                continue;
            }

            let expected = Self::extract_placeholders(reference.get(*key));
            let actual = Self::extract_placeholders(value);
            if expected != actual {
                report.warnings.push(format!(
                    "[{}] {} placeholder mismatch: expected {:?}, found {:?}",
                    locale,
                    key.path(),
                    expected,
                    actual
                ));
            }
        }

        report
    }

    /// Validate every supported locale.
    pub fn validate_all() -> ValidationReport {
        let mut report = ValidationReport::new();
        for locale in Locale::ALL {
            report.merge(Self::validate_locale(locale));
        }
        report
    }

    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_is_complete() {
        for locale in Locale::ALL {
            let report = TranslationValidator::validate_locale(locale);
            assert!(report.errors.is_empty(), "{:?}", report.errors);
        }
    }

    #[test]
    fn test_every_english_key_resolves_non_empty_elsewhere() {
        for key in MessageKey::ALL {
            assert!(!Locale::En.strings().get(*key).is_empty());
            for locale in [Locale::Rom, Locale::Ru] {
                assert!(
                    !locale.strings().get(*key).trim().is_empty(),
                    "{} missing in {}",
                    key.path(),
                    locale
                );
            }
        }
    }

    #[test]
    fn test_all_tables_are_clean() {
        let report = TranslationValidator::validate_all();
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_extract_placeholders() {
        let found = TranslationValidator::extract_placeholders("Hi {name}, {count} left {name}");
        let expected: BTreeSet<String> = ["count", "name"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_report_flags() {
        let mut report = ValidationReport::default();
        assert!(report.is_clean());

        report.warnings.push("drift".to_string());
        assert!(report.has_warnings());
        assert!(!report.has_errors());
        assert!(!report.is_clean());
    }
}
