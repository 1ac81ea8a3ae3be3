//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Note, Tag};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Notes for the current archive view
    pub notes: Vec<Note>,
    /// All tags
    pub tags: Vec<Tag>,
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

/// Replace the displayed note list
pub fn store_set_notes(store: &AppStore, notes: Vec<Note>) {
    store.notes().set(notes);
}

/// Replace the tag list
pub fn store_set_tags(store: &AppStore, tags: Vec<Tag>) {
    store.tags().set(tags);
}
