//! Server-side HTML rendering.
//!
//! Every render function takes a [`PageContext`] built once per request from
//! the resolved locale. All interpolated text goes through [`escape_html`].

mod home;
mod project;

pub use home::{render_home, ContactView, PortfolioCard, PortfolioView};
pub use project::{render_not_found, render_project};

use crate::i18n::{Locale, MessageKey, Translator};
use crate::routing::LocaleRouter;
use chrono::Datelike;

/// Per-request rendering context.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub t: Translator,
    pub year: i32,
}

impl PageContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            t: Translator::new(locale),
            year: chrono::Utc::now().year(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.t.locale()
    }

    /// Translated and HTML-escaped message.
    pub fn text(&self, key: MessageKey) -> String {
        escape_html(self.t.t(key))
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Percent-encode one URL path segment. Spaces become `%20`.
pub fn encode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Wrap a body in the document shell shared by every page.
fn layout(ctx: &PageContext, title: &str, body: &str) -> String {
    let alternates: String = Locale::ALL
        .iter()
        .map(|locale| {
            format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                locale.html_lang(),
                locale.path()
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n{alternates}\n</head>\n<body>\n{nav}\n{body}\n{footer}\n</body>\n</html>\n",
        lang = ctx.locale().html_lang(),
        title = escape_html(title),
        alternates = alternates,
        nav = render_nav(ctx),
        body = body,
        footer = render_footer(ctx),
    )
}

fn render_nav(ctx: &PageContext) -> String {
    let home = ctx.locale().path();
    let links = [
        ("about", MessageKey::NavHome),
        ("stack", MessageKey::NavStack),
        ("process", MessageKey::NavExperience),
        ("portfolio", MessageKey::NavPortfolio),
        ("faq", MessageKey::NavFaq),
    ]
    .iter()
    .map(|(anchor, key)| format!("<a href=\"{}#{}\">{}</a>", home, anchor, ctx.text(*key)))
    .collect::<Vec<_>>()
    .join("");

    // Switching language is a navigation to the other locale's path
    let mut router = LocaleRouter::new();
    let switcher = Locale::ALL
        .iter()
        .map(|locale| {
            router.set_locale(*locale);
            let current = if *locale == ctx.locale() {
                " aria-current=\"true\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\" hreflang=\"{}\" title=\"{}\"{}>{}</a>",
                escape_html(router.path()),
                locale.html_lang(),
                escape_html(locale.native_name()),
                current,
                locale.label()
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        "<nav>\n<a class=\"brand\" href=\"{home}\">RevOrgs</a>\n<div class=\"links\">{links}</div>\n\
<div class=\"lang-switcher\">{switcher}</div>\n<a class=\"cta\" href=\"{home}#contact\">{cta}</a>\n</nav>",
        home = home,
        links = links,
        switcher = switcher,
        cta = ctx.text(MessageKey::NavCta),
    )
}

fn render_footer(ctx: &PageContext) -> String {
    format!(
        "<footer>\n<p>&copy; {} RevOrgs Studio. {}</p>\n</footer>",
        ctx.year,
        ctx.text(MessageKey::FooterRights)
    )
}
