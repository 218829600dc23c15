//! Todo List Component
//!
//! Header with the remaining count and the clear-completed action, then one
//! row per todo or the empty-state hint.

use leptos::prelude::*;

use crate::components::{ClearCompletedButton, TodoRow};
use crate::store::{store_remaining, PageStateStoreFields, PageStore};

#[component]
pub fn TodoList(store: PageStore) -> impl IntoView {
    let remaining = move || {
        let n = store_remaining(&store);
        format!("{} {} left", n, if n == 1 { "item" } else { "items" })
    };

    view! {
        <section class="todo-list">
            <div class="todo-list-header">
                <span class="todo-remaining">{remaining}</span>
                <ClearCompletedButton store=store />
            </div>

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="todo-loading">"Loading..."</div> }
            >
                {move || {
                    let todos = store.todos().get();
                    if todos.is_empty() {
                        view! { <p class="todo-empty">"No todos yet. Add one to get started!"</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="todo-items">
                                {todos
                                    .into_iter()
                                    .map(|todo| view! { <TodoRow todo=todo store=store /> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </section>
    }
}
