use futures::future::BoxFuture;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("screenshot request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("screenshot service returned HTTP {0}")]
    Status(u16),

    #[error("screenshot service returned non-image content type '{0}'")]
    NotAnImage(String),

    #[error("screenshot service returned an empty body")]
    EmptyBody,
}

/// Loads an image URL and reports whether it produced a usable image.
///
/// This is the seam between the resolver's timeout/fallback policy and the
/// network; tests substitute probes with scripted delays.
pub trait ImageProbe: Send + Sync {
    fn probe<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<(), ProbeError>>;
}

/// Probe backed by an HTTP GET.
///
/// A response counts as an image when it is 2xx, declares an `image/*`
/// content type (or none at all), and has a non-empty body.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: reqwest::Client,
}

impl HttpImageProbe {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageProbe for HttpImageProbe {
    fn probe<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<(), ProbeError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProbeError::Status(status.as_u16()));
            }

            if let Some(content_type) = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
            {
                if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
                    return Err(ProbeError::NotAnImage(content_type.to_string()));
                }
            }

            // Only the first non-empty chunk matters
            let mut response = response;
            while let Some(chunk) = response.chunk().await? {
                if !chunk.is_empty() {
                    return Ok(());
                }
            }

            Err(ProbeError::EmptyBody)
        })
    }
}
