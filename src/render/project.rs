use crate::content::Project;
use crate::i18n::MessageKey;
use crate::render::{escape_html, layout, PageContext};
use crate::screenshot::Gallery;

/// Project viewer page with the resolved gallery.
pub fn render_project(ctx: &PageContext, project: &Project, gallery: &Gallery) -> String {
    let title = escape_html(project.title);

    let slides: String = gallery
        .slides
        .iter()
        .enumerate()
        .map(|(idx, slide)| {
            format!(
                "<figure class=\"slide\" data-index=\"{}\"><img src=\"{}\" alt=\"{} {}\"></figure>",
                idx,
                escape_html(slide),
                title,
                idx + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let tags = project
        .tags
        .as_ref()
        .filter(|tags| !tags.is_empty())
        .map(|tags| {
            let items: String = tags
                .iter()
                .map(|tag| format!("<li>{}</li>", escape_html(tag)))
                .collect();
            format!(
                "<h3>{}</h3>\n<ul class=\"tags\">{}</ul>",
                ctx.text(MessageKey::PortfolioTechnologies),
                items
            )
        })
        .unwrap_or_default();

    let live_link = project
        .link
        .map(|link| {
            format!(
                "<a class=\"view-live\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(link),
                ctx.text(MessageKey::PortfolioViewLive)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "<main class=\"project-viewer\" data-live=\"{live}\">\n\
<a class=\"back\" href=\"{home}#portfolio\">{back}</a>\n\
<div class=\"gallery\">\n{slides}\n</div>\n\
<section class=\"details\">\n<span class=\"category\">{category}</span>\n<h1>{title}</h1>\n\
<p class=\"meta\">{client} &middot; {year}</p>\n\
<h3>{about}</h3>\n<p>{description}</p>\n{tags}\n{live_link}\n</section>\n</main>",
        live = gallery.live,
        home = ctx.locale().path(),
        back = ctx.text(MessageKey::PortfolioBack),
        slides = slides,
        category = escape_html(project.category),
        title = title,
        client = escape_html(project.client),
        year = escape_html(project.year),
        about = ctx.text(MessageKey::PortfolioAbout),
        description = escape_html(project.description),
        tags = tags,
        live_link = live_link,
    );

    layout(ctx, &format!("{} | RevOrgs", project.title), &body)
}

/// Localized page for an unknown project id.
pub fn render_not_found(ctx: &PageContext) -> String {
    let body = format!(
        "<main class=\"not-found\">\n<h1>{}</h1>\n<p>{}</p>\n<a href=\"{}#portfolio\">{}</a>\n</main>",
        ctx.text(MessageKey::NotFoundTitle),
        ctx.text(MessageKey::NotFoundText),
        ctx.locale().path(),
        ctx.text(MessageKey::PortfolioBack)
    );
    layout(ctx, ctx.t.t(MessageKey::NotFoundTitle), &body)
}
