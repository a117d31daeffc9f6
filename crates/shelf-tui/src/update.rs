//! Top-level reducer.
//!
//! Routes events to the active feature slice based on the render target
//! derived from the session snapshot. Pure: mutates state and returns
//! effects, never performs I/O.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shelf_core::session::{RenderTarget, SessionSnapshot, select};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{home, login, products, register};
use crate::state::{AppState, AuthScreen, MainTab};

/// Processes one event, mutating state and returning effects to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Session(snapshot) => on_session_change(state, snapshot),
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(state, &key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::LoginResult(result) => login::update::handle_result(state, result),
        UiEvent::RegisterResult(result) => register::update::handle_result(state, result),
        UiEvent::ProductsLoaded(result) => products::update::handle_loaded(state, result),
    }
}

/// Applies a session snapshot published by the store.
///
/// Transitions out of the authenticated set reset per-session UI state so
/// a later login starts clean.
fn on_session_change(state: &mut AppState, snapshot: SessionSnapshot) -> Vec<UiEffect> {
    let was = select(&state.session);
    state.session = snapshot;
    let now = select(&state.session);

    if was == RenderTarget::MainTabs && now == RenderTarget::AuthStack {
        state.reset_after_logout();
    }
    vec![]
}

fn handle_key(state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match select(&state.session) {
        RenderTarget::Loading => vec![],
        RenderTarget::AuthStack => match state.auth_screen {
            AuthScreen::Login => login::update::handle_key(state, key),
            AuthScreen::Register => register::update::handle_key(state, key),
        },
        RenderTarget::MainTabs => handle_main_tabs_key(state, key),
    }
}

fn handle_main_tabs_key(state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        KeyCode::Tab => {
            let next = match state.active_tab {
                MainTab::Home => MainTab::Products,
                MainTab::Products => MainTab::Home,
            };
            return switch_tab(state, next);
        }
        KeyCode::Char('1') => return switch_tab(state, MainTab::Home),
        KeyCode::Char('2') => return switch_tab(state, MainTab::Products),
        _ => {}
    }

    match state.active_tab {
        MainTab::Home => home::update::handle_key(state, key),
        MainTab::Products => products::update::handle_key(state, key),
    }
}

fn switch_tab(state: &mut AppState, tab: MainTab) -> Vec<UiEffect> {
    state.active_tab = tab;
    if tab == MainTab::Products {
        products::update::fetch_on_entry(state)
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::api::types::{Role, UserRecord};
    use shelf_core::config::Config;
    use shelf_core::session::SessionSnapshot;

    use super::*;

    fn user() -> UserRecord {
        UserRecord {
            id: 1,
            email: "a@b.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            role: Role::Merchandiser,
        }
    }

    fn key_event(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    /// Keys are ignored while the session is restoring.
    #[test]
    fn test_loading_ignores_input() {
        let mut state = AppState::new(Config::default(), SessionSnapshot::initial());
        let effects = update(&mut state, key_event(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(state.login.error.is_none());
    }

    /// Ctrl+C quits from every render target.
    #[test]
    fn test_ctrl_c_quits() {
        let mut state = AppState::new(Config::default(), SessionSnapshot::initial());
        let ctrl_c = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        let effects = update(&mut state, ctrl_c);
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    /// Entering the products tab triggers the initial fetch.
    #[test]
    fn test_switching_to_products_fetches_once() {
        let mut state = AppState::new(
            Config::default(),
            SessionSnapshot::authenticated(user(), "tok".to_string()),
        );

        let effects = update(&mut state, key_event(KeyCode::Char('2')));
        assert!(matches!(effects.as_slice(), [UiEffect::LoadProducts { .. }]));
        assert_eq!(state.active_tab, MainTab::Products);

        // Switching away and back doesn't re-fetch while in flight.
        update(&mut state, key_event(KeyCode::Char('1')));
        let effects = update(&mut state, key_event(KeyCode::Char('2')));
        assert!(effects.is_empty());
    }

    /// Logout transition resets forms and returns to the login screen.
    #[test]
    fn test_session_drop_resets_ui_state() {
        let mut state = AppState::new(
            Config::default(),
            SessionSnapshot::authenticated(user(), "tok".to_string()),
        );
        state.active_tab = MainTab::Products;
        state.products.loaded_once = true;

        update(
            &mut state,
            UiEvent::Session(SessionSnapshot::unauthenticated()),
        );

        assert_eq!(state.active_tab, MainTab::Home);
        assert_eq!(state.auth_screen, AuthScreen::Login);
        assert!(!state.products.loaded_once);
    }
}
