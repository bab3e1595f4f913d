//! Combined login/registration form.

use crate::state::auth::{AuthMode, FormState};

#[must_use]
pub fn heading(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Welcome back", "Log in to your account."),
        AuthMode::Register => ("Sign up", "Create a new account to get started."),
    }
}

#[must_use]
pub fn submit_label(state: &FormState) -> &'static str {
    match state.mode {
        AuthMode::Login => "Log in",
        AuthMode::Register if state.is_submitting() => "Registering...",
        AuthMode::Register => "Create account",
    }
}

#[must_use]
pub fn render_login(state: &FormState) -> String {
    let (title, subtitle) = heading(state.mode);
    let fields = &state.fields;
    let mut lines = vec![title.to_owned(), subtitle.to_owned(), String::new()];

    if state.mode == AuthMode::Register {
        lines.push(format!("name:     {}", fields.name));
        lines.push(format!("surname:  {}", fields.surname));
    }
    lines.push(format!("email:    {}", fields.email));
    lines.push(format!("password: {}", "*".repeat(fields.password.chars().count())));
    lines.push(String::new());
    lines.push(format!("<{}>", submit_label(state)));

    lines.push(match state.mode {
        AuthMode::Login => "Forgot your password? See /contact. No account? `mode register`".to_owned(),
        AuthMode::Register => "Already have an account? `mode login`".to_owned(),
    });
    lines.join("\n")
}
