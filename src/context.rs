//! Application Context
//!
//! Session and backend configuration provided via Leptos Context API.

use leptos::prelude::*;
use todo_sync::{ApiConfig, Session, SessionStore, TodoId};

use crate::storage::BrowserStorage;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session - read
    pub session: ReadSignal<Option<Session>>,
    /// Current session - write
    set_session: WriteSignal<Option<Session>>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let (session, set_session) = signal(SessionStore::new(BrowserStorage).current());
        Self {
            session,
            set_session,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Session store over `localStorage`
    pub fn sessions(&self) -> SessionStore<BrowserStorage> {
        SessionStore::new(BrowserStorage)
    }

    /// Re-read the persisted session; called once per page mount
    pub fn refresh_session(&self) -> Option<Session> {
        let session = self.sessions().current();
        self.set_session.set(session.clone());
        session
    }

    pub fn sign_in(&self, session: Session) {
        self.set_session.set(Some(session));
    }

    pub fn logout(&self) {
        self.sessions().logout();
        self.set_session.set(None);
    }

    /// The server rejected the token
    pub fn invalidate(&self) {
        self.sessions().invalidate();
        self.set_session.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Todo page actions handed to the list and form components
#[derive(Clone, Copy)]
pub struct TodoActions {
    pub compose_title: Callback<String>,
    pub compose_description: Callback<String>,
    pub create: Callback<()>,
    pub toggle: Callback<TodoId>,
    pub begin_edit: Callback<TodoId>,
    pub edit_title: Callback<String>,
    pub edit_description: Callback<String>,
    pub edit_completed: Callback<bool>,
    pub save_edit: Callback<()>,
    pub cancel_edit: Callback<()>,
    pub delete: Callback<TodoId>,
    pub clear_completed: Callback<()>,
    pub logout: Callback<()>,
}

pub fn use_todo_actions() -> TodoActions {
    expect_context::<TodoActions>()
}
