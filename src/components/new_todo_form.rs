//! New Todo Form Component
//!
//! Title and description inputs for the next todo. The text lives in the
//! board's compose draft, so a failed create keeps what was typed.

use leptos::prelude::*;
use todo_sync::domain::FALLBACK_DISPLAY_NAME;

use crate::context::{use_app_context, use_todo_actions};
use crate::store::{PageStateStoreFields, PageStore};

#[component]
pub fn NewTodoForm(store: PageStore) -> impl IntoView {
    let ctx = use_app_context();
    let actions = use_todo_actions();

    let greeting = move || {
        let name = ctx
            .session
            .get()
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());
        format!("What's next, {}?", name)
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions.create.run(());
    };

    // Enter submits, Shift+Enter keeps the newline
    let on_description_key = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            actions.create.run(());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <h2 class="new-todo-heading">{greeting}</h2>
            <input
                type="text"
                class="new-todo-title"
                placeholder="Todo title"
                prop:value=move || store.compose().with(|c| c.title.clone())
                on:input=move |ev| actions.compose_title.run(event_target_value(&ev))
            />
            <textarea
                class="new-todo-description"
                placeholder="Description (optional)"
                rows="2"
                prop:value=move || store.compose().with(|c| c.description.clone())
                on:input=move |ev| actions.compose_description.run(event_target_value(&ev))
                on:keydown=on_description_key
            ></textarea>
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
