use crate::contact::{ContactForm, FieldErrors};
use crate::content::{self, Project, ALL_CATEGORIES, STACK};
use crate::i18n::{Locale, MessageKey};
use crate::render::{encode_path_segment, escape_html, layout, PageContext};
use crate::screenshot::{ImageSource, ScreenshotResolver};
use futures::future::join_all;

/// State of the contact section.
#[derive(Debug, Clone, Copy)]
pub enum ContactView<'a> {
    /// Empty form
    Blank,
    /// Form re-rendered with the submitted values and field errors
    Errors {
        form: &'a ContactForm,
        errors: FieldErrors,
    },
    /// Success panel, with a mailto link when the relay did not deliver
    Sent { mailto: Option<&'a str> },
}

/// A portfolio card: the project and the image it is shown with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioCard {
    pub project: Project,
    pub image: ImageSource,
}

/// Portfolio section contents for one locale and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    /// Every category of the locale, `All` first
    pub categories: Vec<&'static str>,
    /// Selected category; unknown names select `All`
    pub active: &'static str,
    pub cards: Vec<PortfolioCard>,
}

impl PortfolioView {
    /// Cards for `category` showing each project's static image.
    pub fn with_static_images(locale: Locale, category: &str) -> Self {
        let projects = content::portfolio(locale);
        let categories = content::categories(&projects);
        let active = categories
            .iter()
            .copied()
            .find(|c| *c == category)
            .unwrap_or(ALL_CATEGORIES);

        let cards = content::filter_by_category(&projects, active)
            .into_iter()
            .map(|project| PortfolioCard {
                image: ImageSource::Fallback(project.image.to_string()),
                project,
            })
            .collect();

        Self {
            categories,
            active,
            cards,
        }
    }

    /// Cards for `category` with live previews, resolved concurrently.
    ///
    /// Each card is bounded by the resolver timeout, so the whole view is too.
    pub async fn resolve(resolver: &ScreenshotResolver, locale: Locale, category: &str) -> Self {
        let mut view = Self::with_static_images(locale, category);
        let images = join_all(view.cards.iter().map(|card| resolver.preview(&card.project))).await;
        for (card, image) in view.cards.iter_mut().zip(images) {
            card.image = image;
        }
        view
    }
}

/// The single-page site for one locale.
pub fn render_home(ctx: &PageContext, portfolio: &PortfolioView, contact: ContactView<'_>) -> String {
    let body = [
        "<main>".to_string(),
        render_hero(ctx),
        render_stack(ctx),
        render_process(ctx),
        render_portfolio(ctx, portfolio),
        render_social_proof(ctx),
        render_faq(ctx),
        render_contact(ctx, contact),
        "</main>".to_string(),
    ]
    .join("\n");

    let title = format!(
        "RevOrgs | {} {}",
        ctx.t.t(MessageKey::HeroTitlePre),
        ctx.t.t(MessageKey::HeroTitleHighlight)
    );
    layout(ctx, &title, &body)
}

fn section_header(ctx: &PageContext, kicker: MessageKey, title: MessageKey, subtitle: Option<MessageKey>) -> String {
    let subtitle = subtitle
        .map(|key| format!("<p class=\"subtitle\">{}</p>", ctx.text(key)))
        .unwrap_or_default();
    format!(
        "<header>\n<span class=\"kicker\">{}</span>\n<h2>{}</h2>\n{}\n</header>",
        ctx.text(kicker),
        ctx.text(title),
        subtitle
    )
}

fn render_hero(ctx: &PageContext) -> String {
    format!(
        "<section id=\"about\" class=\"hero\">\n<h1>{} <span class=\"highlight\">{}</span></h1>\n\
<p>{}</p>\n<a class=\"scroll\" href=\"#stack\">{}</a>\n</section>",
        ctx.text(MessageKey::HeroTitlePre),
        ctx.text(MessageKey::HeroTitleHighlight),
        ctx.text(MessageKey::HeroSubtitle),
        ctx.text(MessageKey::HeroScroll),
    )
}

fn render_stack(ctx: &PageContext) -> String {
    let items: String = STACK
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item.name)))
        .collect();

    format!(
        "<section id=\"stack\">\n{}\n<ul class=\"tech-grid\">{}</ul>\n</section>",
        section_header(
            ctx,
            MessageKey::TechKicker,
            MessageKey::TechTitle,
            Some(MessageKey::TechSubtitle)
        ),
        items
    )
}

fn render_process(ctx: &PageContext) -> String {
    let steps: String = content::process(ctx.locale())
        .iter()
        .map(|step| {
            format!(
                "<li class=\"process-step\">\n<span class=\"step-id\">{}</span>\n<h3>{}</h3>\n<p>{}</p>\n</li>",
                escape_html(step.id),
                escape_html(step.title),
                escape_html(step.description)
            )
        })
        .collect();

    format!(
        "<section id=\"process\">\n{}\n<ol class=\"timeline\">\n{}\n</ol>\n</section>",
        section_header(
            ctx,
            MessageKey::ExperienceKicker,
            MessageKey::ExperienceTitle,
            Some(MessageKey::ExperienceSubtitle)
        ),
        steps
    )
}

fn render_portfolio(ctx: &PageContext, view: &PortfolioView) -> String {
    let segment = ctx.locale().segment();

    let filters: String = view
        .categories
        .iter()
        .map(|category| {
            let (label, href) = if *category == ALL_CATEGORIES {
                (ctx.text(MessageKey::PortfolioAll), format!("/{}#portfolio", segment))
            } else {
                (
                    escape_html(category),
                    format!("/{}/category/{}#portfolio", segment, encode_path_segment(category)),
                )
            };
            let current = if *category == view.active {
                " aria-current=\"true\""
            } else {
                ""
            };
            format!(
                "<a class=\"filter\" href=\"{}\" data-filter=\"{}\"{}>{}</a>",
                escape_html(&href),
                escape_html(category),
                current,
                label
            )
        })
        .collect();

    let cards: String = view
        .cards
        .iter()
        .map(|PortfolioCard { project, image }| {
            format!(
                "<article class=\"portfolio-card\" data-category=\"{category}\">\n\
<a href=\"/{segment}/projects/{id}\">\n\
<div class=\"portfolio-image\">\n\
<img src=\"{image}\" alt=\"{title}\" loading=\"lazy\" data-source=\"{source}\">\n</div>\n\
<span class=\"category\">{category}</span>\n<h3>{title}</h3>\n<p>{client}</p>\n</a>\n</article>",
                category = escape_html(project.category),
                segment = segment,
                id = escape_html(project.id),
                image = escape_html(image.url()),
                source = if image.is_remote() { "remote" } else { "fallback" },
                title = escape_html(project.title),
                client = escape_html(project.client),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<section id=\"portfolio\">\n{}\n<nav class=\"filters\">{}</nav>\n<div class=\"portfolio-grid\">\n{}\n</div>\n</section>",
        section_header(
            ctx,
            MessageKey::PortfolioKicker,
            MessageKey::PortfolioTitle,
            Some(MessageKey::PortfolioSubtitle)
        ),
        filters,
        cards
    )
}

fn render_social_proof(ctx: &PageContext) -> String {
    let stats: String = content::stats(ctx.locale())
        .iter()
        .map(|stat| {
            format!(
                "<div class=\"stat-item\"><strong>{}</strong><span>{}</span></div>",
                escape_html(stat.value),
                escape_html(stat.label)
            )
        })
        .collect();

    let testimonials: String = content::testimonials(ctx.locale())
        .iter()
        .map(|item| {
            format!(
                "<blockquote class=\"testimonial\" data-rating=\"{}\">\n<p>{}</p>\n<footer>{}, {} &middot; {}</footer>\n</blockquote>",
                item.rating,
                escape_html(item.text),
                escape_html(item.name),
                escape_html(item.role),
                escape_html(item.company)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<section id=\"testimonials\">\n{}\n<div class=\"stats\">{}</div>\n{}\n</section>",
        section_header(
            ctx,
            MessageKey::SocialProofKicker,
            MessageKey::SocialProofTitle,
            None
        ),
        stats,
        testimonials
    )
}

fn render_faq(ctx: &PageContext) -> String {
    let items: String = content::faq(ctx.locale())
        .iter()
        .map(|item| {
            format!(
                "<details id=\"faq-{}\">\n<summary>{}</summary>\n<p>{}</p>\n</details>",
                escape_html(item.id),
                escape_html(item.question),
                escape_html(item.answer)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<section id=\"faq\">\n{}\n{}\n</section>",
        section_header(ctx, MessageKey::FaqKicker, MessageKey::FaqTitle, None),
        items
    )
}

fn field_error(ctx: &PageContext, error: Option<MessageKey>) -> String {
    error
        .map(|key| format!("<p class=\"field-error\" role=\"alert\">{}</p>", ctx.text(key)))
        .unwrap_or_default()
}

fn render_contact_form(ctx: &PageContext, form: Option<&ContactForm>, errors: FieldErrors) -> String {
    let value = |f: fn(&ContactForm) -> &str| form.map(|form| escape_html(f(form))).unwrap_or_default();

    format!(
        "<form method=\"post\" action=\"/{segment}/contact#contact\" novalidate>\n\
<label for=\"name\">{name_label}</label>\n\
<input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\" placeholder=\"{name_ph}\">\n{name_error}\n\
<label for=\"email\">{email_label}</label>\n\
<input id=\"email\" name=\"email\" type=\"email\" value=\"{email}\" placeholder=\"{email_ph}\">\n{email_error}\n\
<label for=\"message\">{message_label}</label>\n\
<textarea id=\"message\" name=\"message\" rows=\"4\" placeholder=\"{message_ph}\">{message}</textarea>\n{message_error}\n\
<button type=\"submit\">{submit}</button>\n</form>",
        segment = ctx.locale().segment(),
        name_label = ctx.text(MessageKey::ContactFormName),
        name = value(|f| f.name.as_str()),
        name_ph = ctx.text(MessageKey::ContactFormNamePh),
        name_error = field_error(ctx, errors.name),
        email_label = ctx.text(MessageKey::ContactFormEmail),
        email = value(|f| f.email.as_str()),
        email_ph = ctx.text(MessageKey::ContactFormEmailPh),
        email_error = field_error(ctx, errors.email),
        message_label = ctx.text(MessageKey::ContactFormMessage),
        message = value(|f| f.message.as_str()),
        message_ph = ctx.text(MessageKey::ContactFormMessagePh),
        message_error = field_error(ctx, errors.message),
        submit = ctx.text(MessageKey::ContactFormSubmit),
    )
}

fn render_contact(ctx: &PageContext, view: ContactView<'_>) -> String {
    let panel = match view {
        ContactView::Blank => render_contact_form(ctx, None, FieldErrors::default()),
        ContactView::Errors { form, errors } => render_contact_form(ctx, Some(form), errors),
        ContactView::Sent { mailto } => {
            let fallback = mailto
                .map(|uri| {
                    format!(
                        "<p class=\"fallback\">{} <a href=\"{}\">{}</a></p>",
                        ctx.text(MessageKey::ContactFormFallbackText),
                        escape_html(uri),
                        ctx.text(MessageKey::ContactFormFallbackLink)
                    )
                })
                .unwrap_or_default();
            format!(
                "<div class=\"success\" role=\"status\">\n<h3>{}</h3>\n<p>{}</p>\n{}\n\
<a href=\"{}#contact\">{}</a>\n</div>",
                ctx.text(MessageKey::ContactFormSuccessTitle),
                ctx.text(MessageKey::ContactFormSuccessText),
                fallback,
                ctx.locale().path(),
                ctx.text(MessageKey::ContactFormSendAgain)
            )
        }
    };

    format!(
        "<section id=\"contact\">\n<h2>{} <span class=\"highlight\">{}</span></h2>\n<p>{}</p>\n{}\n</section>",
        ctx.text(MessageKey::ContactTitlePre),
        ctx.text(MessageKey::ContactTitleHighlight),
        ctx.text(MessageKey::ContactSubtitle),
        panel
    )
}
