use crate::content::Project;
use crate::screenshot::{LoadHandle, ScreenshotRequest, ScreenshotResolver, Viewport};
use futures::future::join_all;
use serde::Serialize;
use tracing::debug;

/// Viewports of the project viewer's slides, in slide order.
pub const GALLERY_VIEWPORTS: [Viewport; 3] = [
    Viewport::DESKTOP_FULL_HD,
    Viewport::DESKTOP_HD,
    Viewport::TABLET_PORTRAIT,
];

/// Slides for the project viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gallery {
    pub slides: Vec<String>,
    /// True when the slides come from the screenshot service
    pub live: bool,
}

impl Gallery {
    /// The project's authored gallery, or its primary image alone.
    pub fn authored(project: &Project) -> Self {
        Self {
            slides: project.static_gallery(),
            live: false,
        }
    }
}

/// Combine per-slot screenshot outcomes into a gallery.
///
/// Slot 0 decides: if it loaded, the screenshot set is used and any other
/// failed slot is filled from the authored gallery at the same index (or the
/// primary image). If slot 0 failed, the authored gallery is used as is.
pub fn compose_gallery(project: &Project, outcomes: Vec<Option<String>>) -> Gallery {
    if !matches!(outcomes.first(), Some(Some(_))) {
        return Gallery::authored(project);
    }

    let slides = outcomes
        .into_iter()
        .enumerate()
        .map(|(idx, outcome)| {
            outcome.unwrap_or_else(|| {
                project
                    .gallery
                    .as_ref()
                    .and_then(|g| g.get(idx))
                    .unwrap_or(&project.image)
                    .to_string()
            })
        })
        .collect();

    Gallery { slides, live: true }
}

impl ScreenshotResolver {
    /// Resolve the viewer gallery for a project.
    ///
    /// All slots are probed concurrently, each with its own timeout.
    pub async fn gallery(&self, project: &Project) -> Gallery {
        let requests: Vec<ScreenshotRequest> = GALLERY_VIEWPORTS
            .iter()
            .filter_map(|viewport| ScreenshotRequest::for_link(project.link, *viewport))
            .collect();

        if requests.is_empty() {
            return Gallery::authored(project);
        }

        let outcomes = join_all(requests.iter().map(|r| self.attempt(r))).await;
        let gallery = compose_gallery(project, outcomes);
        debug!(
            project = project.id,
            live = gallery.live,
            slides = gallery.slides.len(),
            "Gallery resolved"
        );
        gallery
    }

    /// Background variant of [`gallery`](Self::gallery).
    pub fn spawn_gallery(&self, project: &Project) -> LoadHandle<Gallery> {
        if ScreenshotRequest::for_link(project.link, Viewport::DESKTOP_FULL_HD).is_none() {
            return LoadHandle::ready(Gallery::authored(project));
        }

        let resolver = self.clone();
        let project = project.clone();
        LoadHandle::spawn(async move { resolver.gallery(&project).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::find_project;
    use crate::i18n::Locale;
    use crate::screenshot::resolver::tests::{resolver, Script, ScriptedProbe};
    use crate::screenshot::LoadState;
    use std::time::Duration;

    fn project() -> Project {
        find_project(Locale::En, "chirie").unwrap()
    }

    fn project_without_gallery() -> Project {
        Project {
            gallery: None,
            ..project()
        }
    }

    #[test]
    fn test_compose_all_slots_loaded() {
        let outcomes = vec![
            Some("s0".to_string()),
            Some("s1".to_string()),
            Some("s2".to_string()),
        ];
        let gallery = compose_gallery(&project(), outcomes);
        assert!(gallery.live);
        assert_eq!(gallery.slides, vec!["s0", "s1", "s2"]);
    }

    #[test]
    fn test_compose_fills_failed_slots_from_authored_gallery() {
        let p = project();
        let gallery = compose_gallery(&p, vec![Some("s0".to_string()), None, Some("s2".to_string())]);
        assert!(gallery.live);
        assert_eq!(gallery.slides[1], p.gallery.as_ref().unwrap()[1]);
    }

    #[test]
    fn test_compose_fills_failed_slots_with_primary_image() {
        let p = project_without_gallery();
        let gallery = compose_gallery(&p, vec![Some("s0".to_string()), None, None]);
        assert_eq!(gallery.slides, vec!["s0", p.image, p.image]);
    }

    #[test]
    fn test_compose_first_slot_failure_uses_authored_gallery() {
        let p = project();
        let gallery = compose_gallery(&p, vec![None, Some("s1".to_string()), Some("s2".to_string())]);
        assert!(!gallery.live);
        assert_eq!(gallery, Gallery::authored(&p));
    }

    #[test]
    fn test_compose_first_slot_failure_without_gallery_uses_primary_image() {
        let p = project_without_gallery();
        let gallery = compose_gallery(&p, vec![None, None, None]);
        assert_eq!(gallery.slides, vec![p.image]);
    }

    #[test]
    fn test_compose_empty_outcomes() {
        let p = project();
        assert_eq!(compose_gallery(&p, Vec::new()), Gallery::authored(&p));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_probes_three_viewports_concurrently() {
        let probe = ScriptedProbe::new(Script::SucceedAfter(Duration::from_secs(2)));
        let resolver = resolver(probe.clone());

        let start = tokio::time::Instant::now();
        let gallery = resolver.gallery(&project()).await;

        assert!(gallery.live);
        assert_eq!(gallery.slides.len(), 3);
        assert!(gallery.slides[0].contains("/width/1920/height/1080/"));
        assert!(gallery.slides[1].contains("/width/1280/height/720/"));
        assert!(gallery.slides[2].contains("/width/768/height/1024/"));
        assert_eq!(probe.calls(), 3);
        // Concurrent: total time is one probe, not three
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_first_slot_timeout_falls_back() {
        let probe = ScriptedProbe::per_url(|url| {
            if url.contains("/width/1920/") {
                Script::Hang
            } else {
                Script::SucceedAfter(Duration::from_millis(100))
            }
        });
        let resolver = resolver(probe);
        let p = project();

        let gallery = resolver.gallery(&p).await;
        assert_eq!(gallery, Gallery::authored(&p));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_later_slot_failure_is_patched() {
        let probe = ScriptedProbe::per_url(|url| {
            if url.contains("/width/768/") {
                Script::FailAfter(Duration::from_millis(10))
            } else {
                Script::SucceedAfter(Duration::from_millis(100))
            }
        });
        let resolver = resolver(probe);
        let p = project();

        let gallery = resolver.gallery(&p).await;
        assert!(gallery.live);
        assert_eq!(gallery.slides[2], p.gallery.as_ref().unwrap()[2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_without_link_skips_network() {
        let probe = ScriptedProbe::new(Script::Hang);
        let resolver = resolver(probe.clone());
        let p = Project {
            link: None,
            ..project()
        };

        let handle = resolver.spawn_gallery(&p);
        assert_eq!(handle.state(), LoadState::Loaded(Gallery::authored(&p)));
        assert_eq!(resolver.gallery(&p).await, Gallery::authored(&p));
        assert_eq!(probe.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_gallery_settles() {
        let probe = ScriptedProbe::new(Script::SucceedAfter(Duration::from_millis(300)));
        let resolver = resolver(probe);

        let mut handle = resolver.spawn_gallery(&project());
        assert!(handle.state().is_loading());

        let gallery = handle.settled().await.unwrap();
        assert!(gallery.live);
    }
}
