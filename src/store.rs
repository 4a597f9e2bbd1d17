//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiResult;
use crate::task_table;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Task list names in display order (newest on top)
    pub task_lists: Vec<String>,
    /// Whether a credential token is stored
    pub signed_in: bool,
    /// Set while the main view waits for its first load
    pub loading: bool,
}

impl AppState {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
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

/// Empty the table before a fresh load is requested
pub fn store_clear_task_lists(store: &AppStore) {
    store.task_lists().write().clear();
}

/// Merge a finished load into the table, keeping rows created meanwhile
pub fn store_load_task_lists(store: &AppStore, loaded: Option<Vec<String>>) {
    task_table::insert_loaded(&mut store.task_lists().write(), loaded);
}

/// Put a newly created list on top
pub fn store_add_task_list(store: &AppStore, name: String) {
    task_table::insert_top(&mut store.task_lists().write(), name);
}

/// Remove a deleted list by name
pub fn store_remove_task_list(store: &AppStore, name: &str) {
    task_table::remove(&mut store.task_lists().write(), name);
}

pub fn store_check_deletable(store: &AppStore, name: &str) -> ApiResult<()> {
    store.task_lists().with(|rows| task_table::check_deletable(rows, name))
}
