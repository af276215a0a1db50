//! Route-dependent visibility of the manual toggle.
//!
//! On mobile-sized viewports the notes page brings its own navigation, so
//! the toggle button disappears there and the panel is pushed shut. Desktop
//! viewports always show the toggle, whatever the route.

use crate::viewport::Viewport;

/// What the current route and viewport mean for the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// The toggle button is not rendered at all.
    pub hidden: bool,
    /// The panel must close along with the toggle disappearing.
    pub force_closed: bool,
}

/// Recomputes the toggle visibility for the given path.
///
/// Runs on startup, on every route change, and on every window resize.
pub fn recompute(pathname: &str, viewport: &Viewport) -> Visibility {
    if !viewport.is_mobile() {
        return Visibility {
            hidden: false,
            force_closed: false,
        };
    }

    let hidden = pathname.contains("/notes");

    Visibility {
        hidden,
        force_closed: hidden,
    }
}
