//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BoardMeta, Group, Item};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Groups of the current board, in display order
    pub groups: Vec<Group>,
    /// All boards
    pub boards: Vec<BoardMeta>,
    /// Current board ID
    pub current_board_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_board_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update an item in the store by ID, wherever it currently lives
pub fn store_update_item(store: &AppStore, updated_item: Item) {
    store.groups().write().iter_mut()
        .flat_map(|group| group.items.iter_mut())
        .find(|item| item.id == updated_item.id)
        .map(|item| *item = updated_item);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &str) {
    for group in store.groups().write().iter_mut() {
        group.items.retain(|item| item.id != item_id);
    }
}

/// Toggle an item's selection flag (local only, never persisted)
pub fn store_toggle_selected(store: &AppStore, item_id: &str) {
    store.groups().write().iter_mut()
        .flat_map(|group| group.items.iter_mut())
        .find(|item| item.id == item_id)
        .map(|item| item.selected = !item.selected);
}

/// Add a board to the store
pub fn store_add_board(store: &AppStore, board: BoardMeta) {
    store.boards().write().push(board);
}
