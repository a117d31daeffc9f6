//! Product list state.

use shelf_core::api::types::Product;

/// Product list state for the products tab.
#[derive(Debug, Clone, Default)]
pub struct ProductsState {
    /// Fetched products, in server order.
    pub items: Vec<Product>,
    /// Index of the selected row.
    pub selected: usize,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Fetch error to display.
    pub error: Option<String>,
    /// Whether a fetch has completed at least once (drives fetch-on-entry).
    pub loaded_once: bool,
}

impl ProductsState {
    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.items.get(self.selected)
    }
}
