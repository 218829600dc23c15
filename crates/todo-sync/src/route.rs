//! Page Routes
//!
//! The four paths the app answers to, and the rule that keeps the todo page
//! behind a session.

use crate::domain::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`, shows the login form
    Entry,
    Login,
    Register,
    /// The authenticated todo page
    Todos,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Entry => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Todos => "/Home",
        }
    }

    /// Path without the leading slash, as the router matches it
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Todos)
    }

    /// Route actually shown for `self` given the current session
    pub fn guard(self, session: Option<&Session>) -> Route {
        if self.requires_session() && session.is_none() {
            Route::Login
        } else {
            self
        }
    }
}
