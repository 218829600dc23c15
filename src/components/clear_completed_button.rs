//! Clear Completed Button Component

use leptos::prelude::*;

use crate::context::use_todo_actions;
use crate::store::{store_has_completed, PageStore};

/// Deletes every completed todo; disabled while none are completed
#[component]
pub fn ClearCompletedButton(store: PageStore) -> impl IntoView {
    let actions = use_todo_actions();

    view! {
        <button
            class="clear-completed-btn"
            disabled=move || !store_has_completed(&store)
            on:click=move |_| actions.clear_completed.run(())
        >
            "Clear Completed"
        </button>
    }
}
