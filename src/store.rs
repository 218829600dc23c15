//! Todo Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board owns the
//! truth; this store mirrors its snapshots for rendering.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{BoardPhase, BoardState, Draft, EditSession, Todo, TodoId};

/// Rendered todo page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Todos in display order
    pub todos: Vec<Todo>,
    /// New-todo form text
    pub compose: Draft,
    /// Active edit draft
    pub edit: Option<EditSession>,
    /// First fetch still running
    pub loading: bool,
    /// Todos not yet completed
    pub remaining: usize,
    pub has_completed: bool,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

pub fn new_page_store() -> PageStore {
    Store::new(PageState {
        loading: true,
        ..Default::default()
    })
}

// ========================
// Store Helper Functions
// ========================

/// Copy a board snapshot into the store, touching only changed fields
pub fn store_sync(store: &PageStore, state: BoardState) {
    let remaining = state.remaining();
    let has_completed = state.has_completed();
    if store.todos().with_untracked(|t| *t != state.todos) {
        *store.todos().write() = state.todos;
    }
    if store.compose().with_untracked(|c| *c != state.compose) {
        *store.compose().write() = state.compose;
    }
    if store.edit().with_untracked(|e| *e != state.edit) {
        *store.edit().write() = state.edit;
    }
    if store.remaining().get_untracked() != remaining {
        *store.remaining().write() = remaining;
    }
    if store.has_completed().get_untracked() != has_completed {
        *store.has_completed().write() = has_completed;
    }
    let loading = state.phase == BoardPhase::Loading;
    if store.loading().get_untracked() != loading {
        *store.loading().write() = loading;
    }
}

/// Id of the todo being edited, if any
pub fn store_editing_id(store: &PageStore) -> Option<TodoId> {
    store.edit().with(|e| e.as_ref().map(|e| e.id))
}

pub fn store_has_completed(store: &PageStore) -> bool {
    store.has_completed().get()
}

pub fn store_remaining(store: &PageStore) -> usize {
    store.remaining().get()
}
