//! Todo Web App
//!
//! Router with the login, registration and todo pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;
use todo_sync::{ApiConfig, Route as Page};

use crate::components::{LoginPage, RegisterPage, TodoPage};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all pages
    provide_context(AppContext::new(ApiConfig::from_build_env()));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment(Page::Entry.segment()) view=LoginPage />
                <Route path=StaticSegment(Page::Login.segment()) view=LoginPage />
                <Route path=StaticSegment(Page::Register.segment()) view=RegisterPage />
                <Route path=StaticSegment(Page::Todos.segment()) view=TodoPage />
            </Routes>
        </Router>
    }
}
