//! Navigation bar shown above every screen.

use super::Route;

/// Link label and target, in display order.
pub const LINKS: [(&str, Route); 3] = [("Home", Route::Home), ("Contact", Route::Contact), ("Log in", Route::Login)];

/// One-line navbar with the current route highlighted.
#[must_use]
pub fn render_navbar(current: Route) -> String {
    LINKS
        .iter()
        .map(|(label, route)| {
            if *route == current {
                format!("[*{label} {}]", route.path())
            } else {
                format!("[{label} {}]", route.path())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
