//! Home tab reducer.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::AppState;

/// Handles a key press while the home tab is active.
pub fn handle_key(_state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('l') => vec![UiEffect::Logout],
        _ => vec![],
    }
}
