use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

/// Top-level page tree selected from the current browser path.
///
/// Also derives `Routable` so links and the navigator can target a page
/// without spelling out its path.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum PageVariant {
    #[at("/video")]
    Video,
    #[not_found]
    #[at("/")]
    Landing,
}

/// Paths that select something other than the landing page. Matching is exact.
const ROUTES: &[(&str, PageVariant)] = &[("/video", PageVariant::Video)];

/// Maps a path to the page it selects. Total: anything not listed in the
/// route table, including empty or malformed paths, is the landing page.
pub fn resolve(path: &str) -> PageVariant {
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, variant)| *variant)
        .unwrap_or(PageVariant::Landing)
}

/// Resolves the page for the router's current location.
///
/// The browser router owns the `popstate` subscription and re-renders
/// subscribers when the location changes, so the result is recomputed on
/// every navigation and never cached.
#[hook]
pub fn use_page_variant() -> PageVariant {
    let location = use_location();
    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let variant = resolve(&path);
    debug!("Resolved path {:?} to {:?}", path, variant);
    variant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_path_selects_video_page() {
        assert_eq!(resolve("/video"), PageVariant::Video);
    }

    #[test]
    fn root_selects_landing_page() {
        assert_eq!(resolve("/"), PageVariant::Landing);
    }

    #[test]
    fn near_misses_fall_back_to_landing() {
        for path in [
            "",
            "video",
            "/video/",
            "/VIDEO",
            "/video?autoplay=1",
            "/video#top",
            " /video",
            "/videos",
            "//video",
            "/productos",
            "%2Fvideo",
        ] {
            assert_eq!(resolve(path), PageVariant::Landing, "path {:?}", path);
        }
    }

    #[test]
    fn route_table_agrees_with_routable_paths() {
        for (path, variant) in ROUTES {
            assert_eq!(variant.to_path(), *path);
        }
        assert_eq!(PageVariant::Landing.to_path(), "/");
    }

    #[test]
    fn resolving_history_paths_in_order_tracks_each_path() {
        let history = ["/video", "/"];
        let resolved: Vec<_> = history.iter().map(|path| resolve(path)).collect();
        assert_eq!(resolved, vec![PageVariant::Video, PageVariant::Landing]);
    }
}
