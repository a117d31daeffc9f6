//! Products tab reducer.

use crossterm::event::{KeyCode, KeyEvent};
use shelf_core::api::ApiError;
use shelf_core::api::types::{Product, ProductQuery};

use crate::effects::UiEffect;
use crate::state::AppState;

/// Handles a key press while the products tab is active.
pub fn handle_key(state: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.products.select_next();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.products.select_prev();
            vec![]
        }
        KeyCode::Char('r') => refresh(state),
        _ => vec![],
    }
}

/// Emits a fetch unless one is already in flight.
pub fn refresh(state: &mut AppState) -> Vec<UiEffect> {
    if state.products.loading {
        return vec![];
    }
    state.products.loading = true;
    state.products.error = None;
    vec![UiEffect::LoadProducts {
        query: ProductQuery::default(),
    }]
}

/// Emits the initial fetch when the tab is first shown.
pub fn fetch_on_entry(state: &mut AppState) -> Vec<UiEffect> {
    if state.products.loaded_once || state.products.loading {
        return vec![];
    }
    refresh(state)
}

/// Applies a settled product fetch.
pub fn handle_loaded(
    state: &mut AppState,
    result: Result<Vec<Product>, ApiError>,
) -> Vec<UiEffect> {
    state.products.loading = false;
    state.products.loaded_once = true;
    match result {
        Ok(items) => {
            if state.products.selected >= items.len() {
                state.products.selected = items.len().saturating_sub(1);
            }
            state.products.items = items;
            state.products.error = None;
        }
        Err(err) => {
            state.products.error = Some(err.to_string());
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use shelf_core::api::ApiErrorKind;
    use shelf_core::config::Config;
    use shelf_core::session::SessionSnapshot;

    use super::*;

    fn state() -> AppState {
        AppState::new(Config::default(), SessionSnapshot::unauthenticated())
    }

    fn product(id: i64) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Item {id}"),
            "sku": format!("SKU-{id}"),
            "price": "1.00",
            "stock_quantity": 1,
            "created_at": "2026-01-15T09:30:00Z",
            "updated_at": "2026-01-15T09:30:00Z"
        }))
        .unwrap()
    }

    /// First entry fetches; later entries don't re-fetch.
    #[test]
    fn test_fetch_on_entry_only_once() {
        let mut state = state();
        let effects = fetch_on_entry(&mut state);
        assert!(matches!(effects.as_slice(), [UiEffect::LoadProducts { .. }]));
        assert!(state.products.loading);

        handle_loaded(&mut state, Ok(vec![product(1)]));
        assert!(fetch_on_entry(&mut state).is_empty());
    }

    /// Refresh is ignored while a fetch is in flight.
    #[test]
    fn test_refresh_deduplicates_in_flight() {
        let mut state = state();
        assert_eq!(refresh(&mut state).len(), 1);
        assert!(refresh(&mut state).is_empty());
    }

    /// Selection clamps to the fetched list.
    #[test]
    fn test_selection_clamps_after_reload() {
        let mut state = state();
        handle_loaded(&mut state, Ok(vec![product(1), product(2), product(3)]));
        state.products.selected = 2;

        handle_loaded(&mut state, Ok(vec![product(1)]));
        assert_eq!(state.products.selected, 0);
        assert_eq!(state.products.selected_product().unwrap().id, 1);
    }

    /// Fetch errors surface and clear on the next refresh.
    #[test]
    fn test_error_display_and_retry() {
        let mut state = state();
        let err = ApiError {
            kind: ApiErrorKind::Network,
            message: "connection failed".to_string(),
            status: None,
        };
        handle_loaded(&mut state, Err(err));
        assert!(state.products.error.is_some());

        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        let effects = handle_key(&mut state, &key);
        assert_eq!(effects.len(), 1);
        assert!(state.products.error.is_none());
    }
}
