//! Locale routing: path -> active locale.
//!
//! `/` redirects to the default locale, `/<segment>` selects that locale, and
//! every other path falls back to English. Unknown paths are never errors.

use crate::i18n::Locale;
use tracing::debug;

/// Outcome of resolving a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Navigate to this locale's path; nothing is rendered for the current one.
    Redirect(Locale),
    /// Render the page in this locale. `matched` is false for the catch-all.
    Render { locale: Locale, matched: bool },
}

/// Resolve a request path to a routing decision.
pub fn resolve(path: &str) -> Resolution {
    if path == "/" || path.is_empty() {
        return Resolution::Redirect(Locale::DEFAULT);
    }

    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let segment = trimmed.strip_prefix('/').unwrap_or(trimmed);

    match Locale::from_segment(segment) {
        Some(locale) => Resolution::Render {
            locale,
            matched: true,
        },
        None => {
            debug!(path, "Unknown route, falling back to default locale");
            Resolution::Render {
                locale: Locale::DEFAULT,
                matched: false,
            }
        }
    }
}

/// Locale for the first path segment of a longer path such as
/// `/rom/projects/vendi`. Unknown segments resolve to the default locale.
pub fn locale_for_segment(segment: &str) -> Locale {
    Locale::from_segment(segment).unwrap_or(Locale::DEFAULT)
}

/// Router state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Resolving,
    Resolved(Locale),
}

/// Long-lived navigation state machine.
///
/// Every navigation passes through `Resolving` and settles on
/// `Resolved(locale)`. There is no terminal state.
#[derive(Debug, Clone)]
pub struct LocaleRouter {
    state: RouterState,
    path: String,
}

impl LocaleRouter {
    pub fn new() -> Self {
        Self {
            state: RouterState::Resolving,
            path: String::new(),
        }
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    /// Path the router settled on, after following redirects.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Navigate to `path`, following a redirect if the path requires one.
    pub fn navigate(&mut self, path: &str) -> RouterState {
        self.state = RouterState::Resolving;

        let locale = match resolve(path) {
            Resolution::Redirect(target) => {
                debug!(from = path, to = %target.path(), "Redirecting");
                self.path = target.path();
                target
            }
            Resolution::Render { locale, .. } => {
                self.path = path.to_string();
                locale
            }
        };

        self.state = RouterState::Resolved(locale);
        self.state
    }

    /// Change locale by navigating to its path.
    pub fn set_locale(&mut self, locale: Locale) -> RouterState {
        self.navigate(&locale.path())
    }
}

impl Default for LocaleRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_root_redirects_to_english() {
        assert_eq!(resolve("/"), Resolution::Redirect(Locale::En));
    }

    #[test]
    fn test_known_segments_select_locale() {
        assert_eq!(
            resolve("/rom"),
            Resolution::Render {
                locale: Locale::Rom,
                matched: true
            }
        );
        assert!(matches!(resolve("/ru"), Resolution::Render { locale: Locale::Ru, .. }));
        assert!(matches!(resolve("/en"), Resolution::Render { locale: Locale::En, .. }));
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert!(matches!(resolve("/ru/"), Resolution::Render { locale: Locale::Ru, matched: true }));
    }

    #[test]
    fn test_unknown_path_falls_back_to_english() {
        assert_eq!(
            resolve("/xx"),
            Resolution::Render {
                locale: Locale::En,
                matched: false
            }
        );
        assert!(matches!(
            resolve("/ru/extra/segments"),
            Resolution::Render { locale: Locale::En, matched: false }
        ));
    }

    #[test]
    fn test_router_starts_resolving() {
        let router = LocaleRouter::new();
        assert_eq!(router.state(), RouterState::Resolving);
        assert_eq!(router.path(), "");
    }

    #[test]
    fn test_router_root_settles_on_en_path() {
        let mut router = LocaleRouter::new();
        assert_eq!(router.navigate("/"), RouterState::Resolved(Locale::En));
        assert_eq!(router.path(), "/en");
    }

    #[test]
    fn test_set_locale_navigates() {
        let mut router = LocaleRouter::new();
        router.navigate("/en");
        assert_eq!(router.set_locale(Locale::Ru), RouterState::Resolved(Locale::Ru));
        assert_eq!(router.path(), "/ru");
    }

    #[test]
    fn test_locale_for_segment() {
        assert_eq!(locale_for_segment("rom"), Locale::Rom);
        assert_eq!(locale_for_segment("de"), Locale::En);
    }

    proptest! {
        #[test]
        fn prop_unknown_segments_settle_on_english(segment in "[a-z]{1,6}") {
            prop_assume!(Locale::from_segment(&segment).is_none());
            let mut router = LocaleRouter::new();
            prop_assert_eq!(
                router.navigate(&format!("/{}", segment)),
                RouterState::Resolved(Locale::En)
            );
        }

        #[test]
        fn prop_resolution_never_panics(path in "\\PC*") {
            let _ = resolve(&path);
        }
    }
}
