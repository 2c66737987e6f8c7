use serde::Serialize;
use url::Url;

/// Pixel size and quality of a requested screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// 1-100; 100 omits the quality flag entirely
    pub quality: u8,
}

impl Viewport {
    /// Portfolio card preview
    pub const CARD: Viewport = Viewport::new(1200, 800, 90);
    /// Desktop full HD gallery slide
    pub const DESKTOP_FULL_HD: Viewport = Viewport::new(1920, 1080, 95);
    /// Desktop HD gallery slide
    pub const DESKTOP_HD: Viewport = Viewport::new(1280, 720, 95);
    /// Tablet portrait gallery slide
    pub const TABLET_PORTRAIT: Viewport = Viewport::new(768, 1024, 95);

    pub const fn new(width: u32, height: u32, quality: u8) -> Self {
        Self {
            width,
            height,
            quality,
        }
    }
}

/// A validated request for one screenshot of an external site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotRequest {
    target: Url,
    viewport: Viewport,
    full_page: bool,
}

impl ScreenshotRequest {
    /// Build a request for `target`.
    ///
    /// Returns `None` for empty or malformed URLs and for anything that is not
    /// an `http`/`https` URL with a host. Callers treat `None` as "use the
    /// static image", never as an error.
    pub fn new(target: &str, viewport: Viewport) -> Option<Self> {
        let target = target.trim();
        if target.is_empty() {
            return None;
        }

        let url = Url::parse(target).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        if url.host_str().map_or(true, str::is_empty) {
            return None;
        }

        Some(Self {
            target: url,
            viewport,
            full_page: false,
        })
    }

    /// Request for an optional project link.
    pub fn for_link(link: Option<&str>, viewport: Viewport) -> Option<Self> {
        link.and_then(|l| Self::new(l, viewport))
    }

    pub fn with_full_page(mut self, full_page: bool) -> Self {
        self.full_page = full_page;
        self
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Screenshot-service URL for this request.
    ///
    /// Format: `{service}/width/{w}/height/{h}/crop/true/noanimate/noads`
    /// followed by `&fullpage=true` and `&quality={q}` when applicable, then
    /// `/` and the percent-encoded target.
    pub fn to_service_url(&self, service_base: &str) -> String {
        let quality = if self.viewport.quality < 100 {
            format!("&quality={}", self.viewport.quality)
        } else {
            String::new()
        };
        let full_page = if self.full_page { "&fullpage=true" } else { "" };
        let encoded: String =
            url::form_urlencoded::byte_serialize(self.target.as_str().as_bytes()).collect();

        format!(
            "{}/width/{}/height/{}/crop/true/noanimate/noads{}{}/{}",
            service_base.trim_end_matches('/'),
            self.viewport.width,
            self.viewport.height,
            full_page,
            quality,
            encoded
        )
    }
}
