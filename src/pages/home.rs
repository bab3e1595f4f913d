//! Landing page, personalised from the session.

use crate::session::User;

/// Greets the signed-in user; shows a placeholder otherwise.
#[must_use]
pub fn render_home(user: &User) -> String {
    if !user.is_signed_in() {
        return "no data".to_owned();
    }
    // The password is echoed in plain text; the session carries nothing else yet.
    format!("Welcome\nYour email: {}\nYour password: {}", user.email, user.password)
}
