//! Navigation Bar Component

use leptos::prelude::*;
use todo_sync::domain::FALLBACK_DISPLAY_NAME;

use crate::context::{use_app_context, use_todo_actions};

/// App title, signed-in user and logout
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let actions = use_todo_actions();

    let display_name = move || {
        ctx.session
            .get()
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string())
    };

    view! {
        <nav class="navbar">
            <span class="navbar-title">"TodoApp"</span>
            <div class="navbar-user">
                <span class="navbar-name">{display_name}</span>
                <button class="logout-btn" on:click=move |_| actions.logout.run(())>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
