use anyhow::{Context, Result};
use studio_site::config::Config;
use studio_site::i18n::TranslationValidator;
use studio_site::server::{self, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studio_site=info".parse()?),
        )
        .init();

    info!("Starting studio site");

    let report = TranslationValidator::validate_all();
    for error in &report.errors {
        warn!("Translation error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Translation warning: {}", warning);
    }

    let config = Config::from_env()?;
    info!(
        screenshot_service = %config.screenshot_service_url,
        timeout_ms = config.screenshot_timeout.as_millis() as u64,
        "Configuration loaded"
    );

    // One client for screenshot probes and relay calls
    let client = reqwest::Client::builder()
        .user_agent(concat!("studio-site/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    server::serve(AppState::new(config, client)).await
}
