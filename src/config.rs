use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Screenshot service
    pub screenshot_service_url: String,
    pub screenshot_timeout: Duration,

    // Email relay (EmailJS-compatible)
    pub email_relay_url: String,
    pub email_relay_service_id: Option<String>,
    pub email_relay_template_id: Option<String>,
    pub email_relay_public_key: Option<String>,
    pub email_relay_timeout: Duration,

    // Studio inbox, also the mailto fallback recipient
    pub contact_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },

            screenshot_service_url: std::env::var("SCREENSHOT_SERVICE_URL")
                .unwrap_or_else(|_| "https://image.thum.io/get".to_string()),
            screenshot_timeout: Duration::from_millis(
                std::env::var("SCREENSHOT_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3000),
            ),

            email_relay_url: std::env::var("EMAIL_RELAY_URL")
                .unwrap_or_else(|_| "https://api.emailjs.com/api/v1.0/email/send".to_string()),
            email_relay_service_id: non_empty_var("EMAIL_RELAY_SERVICE_ID"),
            email_relay_template_id: non_empty_var("EMAIL_RELAY_TEMPLATE_ID"),
            email_relay_public_key: non_empty_var("EMAIL_RELAY_PUBLIC_KEY"),
            email_relay_timeout: Duration::from_millis(
                std::env::var("EMAIL_RELAY_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10_000),
            ),

            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "hello@revorgs.com".to_string()),
        })
    }

    /// True when every relay identifier is present.
    pub fn relay_configured(&self) -> bool {
        self.email_relay_service_id.is_some()
            && self.email_relay_template_id.is_some()
            && self.email_relay_public_key.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
