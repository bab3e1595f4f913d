use super::home::render_home;
use super::login::{render_login, submit_label};
use super::navbar::render_navbar;
use super::*;
use crate::session::User;
use crate::state::auth::{AuthMode, Field, FormState};

// =============================================================
// Route
// =============================================================

#[test]
fn route_paths_round_trip() {
    for route in [Route::Home, Route::Login, Route::Contact] {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn route_accepts_bare_names() {
    assert_eq!(Route::from_path("home"), Some(Route::Home));
    assert_eq!(Route::from_path("Login"), Some(Route::Login));
    assert_eq!(Route::from_path("/boards"), None);
}

#[test]
fn destinations_map_to_routes() {
    assert_eq!(Route::from(Destination::Landing), Route::Home);
    assert_eq!(Route::from(Destination::Login), Route::Login);
}

// =============================================================
// TerminalShell
// =============================================================

#[test]
fn terminal_shell_follows_navigation() {
    let shell = TerminalShell::new(Route::Login);
    shell.navigate(Destination::Landing);
    assert_eq!(shell.route(), Route::Home);
    shell.navigate(Destination::Login);
    assert_eq!(shell.route(), Route::Login);
}

#[test]
fn notifications_are_marked_by_severity() {
    assert_eq!(format_notification(&Notification::success("Logged in")), "[ok] Logged in");
    assert_eq!(format_notification(&Notification::error("boom")), "[error] boom");
}

// =============================================================
// Pages
// =============================================================

#[test]
fn navbar_highlights_current_route() {
    let bar = render_navbar(Route::Contact);
    assert_eq!(bar, "[Home /] [*Contact /contact] [Log in /login]");
}

#[test]
fn home_without_session_shows_placeholder() {
    assert_eq!(render_home(&User::default()), "no data");
}

#[test]
fn home_greets_signed_in_user() {
    let page = render_home(&User::new("a@b.com", "x"));
    assert!(page.contains("Welcome"));
    assert!(page.contains("a@b.com"));
    assert!(page.contains("Your password: x"));
}

#[test]
fn login_page_masks_password_and_hides_registration_fields() {
    let mut state = FormState::default();
    state.set_field(Field::Email, "a@b.com");
    state.set_field(Field::Password, "secret");

    let page = render_login(&state);
    assert!(page.starts_with("Welcome back"));
    assert!(page.contains("password: ******"));
    assert!(!page.contains("surname"));
}

#[test]
fn register_submit_label_reflects_submission() {
    let mut state = FormState::default();
    state.switch_mode(AuthMode::Register).unwrap();
    assert_eq!(submit_label(&state), "Create account");

    state.begin_submission().unwrap();
    assert_eq!(submit_label(&state), "Registering...");
    assert!(render_login(&state).contains("surname:"));
}

#[test]
fn contact_page_is_a_placeholder() {
    assert!(render_contact().starts_with("Contact"));
}
