use crate::config::Config;
use crate::contact::ContactForm;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("email relay is not configured")]
    NotConfigured,

    #[error("failed to reach email relay: {0}")]
    Request(#[from] reqwest::Error),

    #[error("email relay error ({status}): {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_email: &'a str,
}

/// Transactional email relay (EmailJS-compatible JSON API).
#[derive(Debug, Clone)]
pub struct ContactRelay {
    client: reqwest::Client,
    endpoint: String,
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
    recipient: String,
    timeout: Duration,
}

impl ContactRelay {
    pub fn from_config(config: &Config, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: config.email_relay_url.clone(),
            service_id: config.email_relay_service_id.clone(),
            template_id: config.email_relay_template_id.clone(),
            public_key: config.email_relay_public_key.clone(),
            recipient: config.contact_email.clone(),
            timeout: config.email_relay_timeout,
        }
    }

    /// Studio inbox the relay delivers to.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Send one message. No retries; a relay that does not answer within the
    /// configured timeout is a `Request` error.
    pub async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let (Some(service_id), Some(template_id), Some(public_key)) = (
            self.service_id.as_deref(),
            self.template_id.as_deref(),
            self.public_key.as_deref(),
        ) else {
            return Err(RelayError::NotConfigured);
        };

        let request = RelayRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: TemplateParams {
                from_name: &form.name,
                from_email: &form.email,
                message: &form.message,
                to_email: &self.recipient,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }

        Ok(())
    }
}
