//! HTTP surface: page routes, JSON API, and health check.

use crate::config::Config;
use crate::contact::{self, ContactForm, ContactRelay, Submission};
use crate::content::{self, Project, ALL_CATEGORIES};
use crate::i18n::Locale;
use crate::render::{
    render_home, render_not_found, render_project, ContactView, PageContext, PortfolioView,
};
use crate::routing::{locale_for_segment, LocaleRouter, RouterState};
use crate::screenshot::{Gallery, ImageSource, ScreenshotResolver};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: ScreenshotResolver,
    pub relay: ContactRelay,
}

impl AppState {
    /// Build the state around one shared HTTP client.
    pub fn new(config: Config, client: reqwest::Client) -> Self {
        Self {
            resolver: ScreenshotResolver::from_config(&config, client.clone()),
            relay: ContactRelay::from_config(&config, client),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(locale_page))
        .route("/health", get(health))
        .route("/:locale", get(locale_page))
        .route("/:locale/category/:category", get(category_page))
        .route("/:locale/projects/:id", get(project_page))
        .route("/:locale/contact", post(contact_submit))
        .route("/api/:locale/projects", get(api_projects))
        .route("/api/:locale/projects/:id/preview", get(api_preview))
        .route("/api/:locale/projects/:id/gallery", get(api_gallery))
        .fallback(locale_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured port and serve until the process exits.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    if !state.config.relay_configured() {
        info!("Email relay not configured; contact messages will use the mailto fallback");
    }

    axum::serve(listener, build_router(state))
        .await
        .context("Server error")?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Settle a request path on a locale. `Err` carries the redirect to follow.
fn settle(path: &str) -> std::result::Result<Locale, Redirect> {
    let mut router = LocaleRouter::new();
    match router.navigate(path) {
        RouterState::Resolved(_) if router.path() != path => Err(Redirect::to(router.path())),
        RouterState::Resolved(locale) => Ok(locale),
        RouterState::Resolving => Ok(Locale::DEFAULT),
    }
}

async fn home_page(state: &AppState, locale: Locale, category: &str) -> Html<String> {
    let portfolio = PortfolioView::resolve(&state.resolver, locale, category).await;
    Html(render_home(
        &PageContext::new(locale),
        &portfolio,
        ContactView::Blank,
    ))
}

/// `/`, `/{locale}`, and every path no other route claims.
async fn locale_page(State(state): State<AppState>, uri: Uri) -> Response {
    match settle(uri.path()) {
        Ok(locale) => home_page(&state, locale, ALL_CATEGORIES).await.into_response(),
        Err(redirect) => redirect.into_response(),
    }
}

async fn category_page(
    State(state): State<AppState>,
    Path((segment, category)): Path<(String, String)>,
) -> Html<String> {
    home_page(&state, locale_for_segment(&segment), &category).await
}

async fn project_page(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
) -> Response {
    let ctx = PageContext::new(locale_for_segment(&segment));
    let Some(project) = content::find_project(ctx.locale(), &id) else {
        return (StatusCode::NOT_FOUND, Html(render_not_found(&ctx))).into_response();
    };

    let gallery = load_gallery(&state.resolver, &project).await;
    Html(render_project(&ctx, &project, &gallery)).into_response()
}

async fn contact_submit(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Form(form): Form<ContactForm>,
) -> Response {
    let ctx = PageContext::new(locale_for_segment(&segment));
    let submission = contact::submit(&state.relay, &ctx.t, &form).await;
    let portfolio = PortfolioView::resolve(&state.resolver, ctx.locale(), ALL_CATEGORIES).await;
    let status = if submission.reports_success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let view = match &submission {
        Submission::Invalid(errors) => ContactView::Errors {
            form: &form,
            errors: *errors,
        },
        Submission::Delivered => ContactView::Sent { mailto: None },
        Submission::Fallback { mailto } => ContactView::Sent {
            mailto: Some(mailto.as_str()),
        },
    };

    (status, Html(render_home(&ctx, &portfolio, view))).into_response()
}

async fn api_projects(Path(segment): Path<String>) -> Json<serde_json::Value> {
    let locale = locale_for_segment(&segment);
    let projects = content::portfolio(locale);

    Json(json!({
        "locale": locale,
        "categories": content::categories(&projects),
        "projects": projects,
    }))
}

fn project_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("unknown project: {}", id) })),
    )
        .into_response()
}

async fn api_preview(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
) -> Response {
    let Some(project) = content::find_project(locale_for_segment(&segment), &id) else {
        return project_not_found(&id);
    };

    // Dropping the handle on client disconnect aborts the screenshot request
    let mut handle = state.resolver.spawn_preview(&project);
    let image = handle
        .settled()
        .await
        .unwrap_or_else(|| ImageSource::Fallback(project.image.to_string()));

    Json(json!({ "id": project.id, "image": image })).into_response()
}

async fn api_gallery(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
) -> Response {
    let Some(project) = content::find_project(locale_for_segment(&segment), &id) else {
        return project_not_found(&id);
    };

    let gallery = load_gallery(&state.resolver, &project).await;
    Json(json!({ "id": project.id, "gallery": gallery })).into_response()
}

async fn load_gallery(resolver: &ScreenshotResolver, project: &Project) -> Gallery {
    let mut handle = resolver.spawn_gallery(project);
    handle
        .settled()
        .await
        .unwrap_or_else(|| Gallery::authored(project))
}
