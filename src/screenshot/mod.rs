//! Live website screenshots for the portfolio.
//!
//! Each project card and viewer slide prefers a freshly rendered screenshot
//! of the project's live site and falls back to the project's static images
//! when the link is unusable, the service errors, or the time budget runs out.
//!
//! - `request`: validated screenshot requests and service URL construction
//! - `probe`: the network seam (`ImageProbe`) and its HTTP implementation
//! - `task`: cancellable background loads (`LoadHandle`)
//! - `resolver`: single-image timeout/fallback policy
//! - `gallery`: three-viewport gallery with slot-0-decides policy

mod gallery;
mod probe;
mod request;
mod resolver;
mod task;

pub use gallery::{compose_gallery, Gallery, GALLERY_VIEWPORTS};
pub use probe::{HttpImageProbe, ImageProbe, ProbeError};
pub use request::{ScreenshotRequest, Viewport};
pub use resolver::{ImageSource, ScreenshotResolver};
pub use task::{LoadHandle, LoadState};
