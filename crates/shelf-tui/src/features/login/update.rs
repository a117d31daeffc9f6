//! Login feature reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shelf_core::api::types::UserRecord;
use shelf_core::session::{SessionError, ValidationError};

use crate::effects::UiEffect;
use crate::state::{AppState, AuthScreen};

/// Handles a key press while the login screen is active.
pub fn handle_key(state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    // Screen switch before field editing so 'r' still types into fields.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        state.auth_screen = AuthScreen::Register;
        return vec![];
    }

    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Tab | KeyCode::Down => {
            state.login.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.login.focus_prev();
            vec![]
        }
        _ => {
            state.login.focused_field_mut().handle_key(key);
            vec![]
        }
    }
}

/// Validates and submits the form. Submission is disabled while a call is
/// in flight.
fn submit(state: &mut AppState) -> Vec<UiEffect> {
    if state.login.submitting {
        return vec![];
    }

    if state.login.email.is_empty() || state.login.password.is_empty() {
        state.login.error = Some(ValidationError::MissingFields.to_string());
        return vec![];
    }

    state.login.submitting = true;
    state.login.error = None;
    state.login.notice = None;
    vec![UiEffect::SubmitLogin {
        email: state.login.email.value().to_string(),
        password: state.login.password.value().to_string(),
    }]
}

/// Applies the settled login result.
///
/// Navigation itself happens through the session snapshot event; this
/// only updates form state.
pub fn handle_result(
    state: &mut AppState,
    result: Result<UserRecord, SessionError>,
) -> Vec<UiEffect> {
    state.login.submitting = false;
    match result {
        Ok(user) => {
            tracing::debug!(email = %user.email, "login succeeded");
            state.login = Default::default();
        }
        Err(err) => {
            state.login.error = Some(err.to_string());
        }
    }
    vec![]
}
