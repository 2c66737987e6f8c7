use crate::config::Config;
use crate::content::Project;
use crate::screenshot::{HttpImageProbe, ImageProbe, LoadHandle, ScreenshotRequest, Viewport};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Where a displayed image came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "url", rename_all = "lowercase")]
pub enum ImageSource {
    /// Freshly rendered screenshot of the live site
    Remote(String),
    /// The project's static image
    Fallback(String),
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            ImageSource::Remote(url) | ImageSource::Fallback(url) => url,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Remote(_))
    }
}

/// Resolves live screenshots with a single timeout-bounded attempt per image.
#[derive(Clone)]
pub struct ScreenshotResolver {
    probe: Arc<dyn ImageProbe>,
    service_url: String,
    timeout: Duration,
}

impl ScreenshotResolver {
    pub fn new(probe: Arc<dyn ImageProbe>, service_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            probe,
            service_url: service_url.into(),
            timeout,
        }
    }

    /// Resolver that probes over HTTP with the configured service and timeout.
    pub fn from_config(config: &Config, client: reqwest::Client) -> Self {
        Self::new(
            Arc::new(HttpImageProbe::new(client)),
            config.screenshot_service_url.clone(),
            config.screenshot_timeout,
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Service URL for a request against this resolver's endpoint.
    pub fn service_url(&self, request: &ScreenshotRequest) -> String {
        request.to_service_url(&self.service_url)
    }

    /// One bounded attempt. Returns the screenshot URL if it loaded in time.
    ///
    /// Whichever settles first (load, error, or timeout) decides; the losing
    /// future is dropped, so nothing can fire afterwards.
    pub async fn attempt(&self, request: &ScreenshotRequest) -> Option<String> {
        let url = self.service_url(request);

        match timeout(self.timeout, self.probe.probe(&url)).await {
            Ok(Ok(())) => Some(url),
            Ok(Err(e)) => {
                debug!(target_url = %request.target(), error = %e, "Screenshot failed");
                None
            }
            Err(_) => {
                debug!(
                    target_url = %request.target(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Screenshot timed out"
                );
                None
            }
        }
    }

    /// Resolve a preview image for `link`, falling back to `fallback`.
    ///
    /// A missing or malformed link short-circuits to the fallback without
    /// touching the network.
    pub async fn resolve(&self, link: Option<&str>, fallback: &str, viewport: Viewport) -> ImageSource {
        let Some(request) = ScreenshotRequest::for_link(link, viewport) else {
            return ImageSource::Fallback(fallback.to_string());
        };

        match self.attempt(&request).await {
            Some(url) => ImageSource::Remote(url),
            None => ImageSource::Fallback(fallback.to_string()),
        }
    }

    /// Background variant of [`resolve`](Self::resolve).
    ///
    /// The handle starts `Loading` and settles exactly once. Without a usable
    /// link it is returned already `Loaded` with the fallback.
    pub fn spawn_resolve(
        &self,
        link: Option<&str>,
        fallback: &str,
        viewport: Viewport,
    ) -> LoadHandle<ImageSource> {
        let Some(request) = ScreenshotRequest::for_link(link, viewport) else {
            return LoadHandle::ready(ImageSource::Fallback(fallback.to_string()));
        };

        let resolver = self.clone();
        let fallback = fallback.to_string();
        LoadHandle::spawn(async move {
            match resolver.attempt(&request).await {
                Some(url) => ImageSource::Remote(url),
                None => ImageSource::Fallback(fallback),
            }
        })
    }

    /// Card preview for a project.
    pub async fn preview(&self, project: &Project) -> ImageSource {
        self.resolve(project.link, project.image, Viewport::CARD).await
    }

    pub fn spawn_preview(&self, project: &Project) -> LoadHandle<ImageSource> {
        self.spawn_resolve(project.link, project.image, Viewport::CARD)
    }
}
