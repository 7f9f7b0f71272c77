//! Click routing decision logic
//!
//! Pure function from a target url and a window snapshot to a route action.
//! The snapshot is taken fresh per click by the caller; nothing here caches
//! window state across events.

use std::fmt;

/// Opaque identifier for one open application window, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One open application window as seen in a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRef {
    pub id: WindowId,
    pub current_url: String,
}

/// The action resolved for one notification click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Focus an existing window that already shows the target url
    Focus(WindowId),
    /// No window matches; open a new one at the target url
    OpenNew,
}

/// Resolve a click against a window snapshot.
///
/// Windows are scanned in enumeration order and the first whose current url
/// exactly equals the target wins. Exactly one action results: focus that
/// window, or open a new one.
pub fn route_click(target_url: &str, windows: &[WindowRef]) -> Route {
    windows
        .iter()
        .find(|window| window.current_url == target_url)
        .map(|window| Route::Focus(window.id))
        .unwrap_or(Route::OpenNew)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(urls: &[&str]) -> Vec<WindowRef> {
        urls.iter()
            .enumerate()
            .map(|(i, url)| WindowRef {
                id: WindowId(i as u64 + 1),
                current_url: url.to_string(),
            })
            .collect()
    }

    #[test]
    fn focuses_matching_window() {
        let windows = snapshot(&["/a", "/x", "/b"]);
        assert_eq!(route_click("/x", &windows), Route::Focus(WindowId(2)));
    }

    #[test]
    fn first_match_wins_in_enumeration_order() {
        let windows = snapshot(&["/a", "/x", "/x"]);
        assert_eq!(route_click("/x", &windows), Route::Focus(WindowId(2)));
    }

    #[test]
    fn no_match_opens_new_window() {
        let windows = snapshot(&["/a", "/b"]);
        assert_eq!(route_click("/x", &windows), Route::OpenNew);
    }

    #[test]
    fn empty_snapshot_opens_new_window() {
        assert_eq!(route_click("/", &[]), Route::OpenNew);
    }

    #[test]
    fn match_is_exact_not_prefix() {
        let windows = snapshot(&["/x/sub", "/x?q=1"]);
        assert_eq!(route_click("/x", &windows), Route::OpenNew);
    }
}
