//! Internationalization (i18n) module for the site's three locales.
//!
//! # Architecture
//!
//! - `locale`: the closed `Locale` enum (en, rom, ru) and its URL segments
//! - `strings`: one statically typed `LocaleStrings` table per locale
//! - `keys`: `MessageKey`, the closed set of message identifiers
//! - `translator`: per-request translation access with English fallback
//! - `validator`: completeness and placeholder checks over every table
//!
//! # Example
//!
//! ```rust
//! use studio_site::i18n::{Locale, MessageKey, Translator};
//!
//! let t = Translator::new(Locale::Rom);
//! assert_eq!(t.t(MessageKey::PortfolioAll), "Toate");
//! ```

mod keys;
mod locale;
mod strings;
mod translator;
mod validator;

pub use keys::MessageKey;
pub use locale::Locale;
pub use strings::LocaleStrings;
pub use translator::Translator;
pub use validator::{TranslationValidator, ValidationReport};
