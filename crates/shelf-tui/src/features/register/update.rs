//! Register feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use shelf_core::api::types::UserRecord;
use shelf_core::session::SessionError;

use crate::effects::UiEffect;
use crate::state::{AppState, AuthScreen};

/// Handles a key press while the register screen is active.
pub fn handle_key(state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            state.auth_screen = AuthScreen::Login;
            vec![]
        }
        KeyCode::Enter => submit(state),
        KeyCode::Tab | KeyCode::Down => {
            state.register.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.register.focus_prev();
            vec![]
        }
        _ => {
            if let Some(field) = state.register.focused_field_mut() {
                field.handle_key(key);
            } else {
                // Role picker: Left/Right cycle the closed role set.
                match key.code {
                    KeyCode::Left => state.register.cycle_role(false),
                    KeyCode::Right => state.register.cycle_role(true),
                    _ => {}
                }
            }
            vec![]
        }
    }
}

/// Validates client-side, then submits. Validation failures never emit an
/// effect, so no network call happens.
fn submit(state: &mut AppState) -> Vec<UiEffect> {
    if state.register.submitting {
        return vec![];
    }

    let form = state.register.to_form();
    if let Err(err) = form.validate() {
        state.register.error = Some(err.to_string());
        return vec![];
    }

    state.register.submitting = true;
    state.register.error = None;
    vec![UiEffect::SubmitRegister { form }]
}

/// Applies the settled register result.
///
/// Registration is not auto-login: on success the UI returns to the login
/// screen with a notice, mirroring the session store's contract.
pub fn handle_result(
    state: &mut AppState,
    result: Result<UserRecord, SessionError>,
) -> Vec<UiEffect> {
    state.register.submitting = false;
    match result {
        Ok(user) => {
            tracing::debug!(email = %user.email, "registration succeeded");
            state.register = crate::features::register::RegisterState::new(
                state.config.default_role,
            );
            state.auth_screen = AuthScreen::Login;
            state.login.notice = Some("Registration successful. Please log in.".to_string());
        }
        Err(err) => {
            state.register.error = Some(err.to_string());
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use shelf_core::api::types::Role;
    use shelf_core::config::Config;
    use shelf_core::session::SessionSnapshot;

    use super::*;

    fn state() -> AppState {
        let mut state = AppState::new(Config::default(), SessionSnapshot::unauthenticated());
        state.auth_screen = AuthScreen::Register;
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(state, &key(KeyCode::Char(c)));
        }
    }

    fn fill_valid_form(state: &mut AppState) {
        type_into(state, "Ada");
        handle_key(state, &key(KeyCode::Tab));
        type_into(state, "Byron");
        handle_key(state, &key(KeyCode::Tab));
        type_into(state, "a@b.com");
        handle_key(state, &key(KeyCode::Tab));
        type_into(state, "pw");
        handle_key(state, &key(KeyCode::Tab));
        type_into(state, "pw");
    }

    /// Password mismatch is caught client-side; no effect emitted.
    #[test]
    fn test_password_mismatch_short_circuits() {
        let mut state = state();
        fill_valid_form(&mut state);
        // Corrupt the confirmation.
        type_into(&mut state, "x");

        let effects = handle_key(&mut state, &key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            state.register.error.as_deref(),
            Some("Passwords don't match")
        );
    }

    /// Valid form emits the submit effect with the selected role.
    #[test]
    fn test_submit_carries_selected_role() {
        let mut state = state();
        fill_valid_form(&mut state);
        // Move to the role picker and cycle once.
        handle_key(&mut state, &key(KeyCode::Tab));
        handle_key(&mut state, &key(KeyCode::Right));

        let effects = handle_key(&mut state, &key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SubmitRegister { form }] if form.role == Role::Supervisor
        ));
    }

    /// Success returns to the login screen with a notice, form cleared.
    #[test]
    fn test_success_returns_to_login_with_notice() {
        let mut state = state();
        state.register.submitting = true;

        let user = UserRecord {
            id: 1,
            email: "a@b.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            role: Role::Merchandiser,
        };
        handle_result(&mut state, Ok(user));

        assert_eq!(state.auth_screen, AuthScreen::Login);
        assert!(state.login.notice.as_deref().unwrap().contains("successful"));
        assert!(state.register.first_name.is_empty());
        assert!(!state.register.submitting);
    }

    /// Esc returns to the login screen.
    #[test]
    fn test_esc_returns_to_login() {
        let mut state = state();
        handle_key(&mut state, &key(KeyCode::Esc));
        assert_eq!(state.auth_screen, AuthScreen::Login);
    }
}
