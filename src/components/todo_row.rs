//! Todo Row Component
//!
//! Displays one todo, or the inline edit form when it is the edit target.

use leptos::html;
use leptos::prelude::*;
use todo_sync::Todo;

use crate::context::use_todo_actions;
use crate::store::{store_editing_id, PageStateStoreFields, PageStore};

#[component]
pub fn TodoRow(todo: Todo, store: PageStore) -> impl IntoView {
    let actions = use_todo_actions();
    let id = todo.id;
    let is_editing = move || store_editing_id(&store) == Some(id);

    let row_class = if todo.is_completed { "todo-row completed" } else { "todo-row" };
    let has_description = !todo.description.is_empty();
    let Todo {
        title,
        description,
        is_completed,
        ..
    } = todo;

    view! {
        <li class=row_class>
            <Show
                when=is_editing
                fallback=move || {
                    let title = title.clone();
                    let description = description.clone();
                    view! {
                        <div class="todo-view">
                            <input
                                type="checkbox"
                                class="todo-toggle"
                                prop:checked=is_completed
                                on:change=move |_| actions.toggle.run(id)
                            />
                            <div class="todo-text">
                                <span class="todo-title">{title}</span>
                                {has_description.then(|| view! {
                                    <p class="todo-description">{description}</p>
                                })}
                            </div>
                            <div class="todo-buttons">
                                <button class="edit-btn" on:click=move |_| actions.begin_edit.run(id)>
                                    "Edit"
                                </button>
                                <button class="delete-btn" on:click=move |_| actions.delete.run(id)>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    }
                }
            >
                <TodoEditForm store=store />
            </Show>
        </li>
    }
}

/// Inline editor bound to the board's edit draft
#[component]
fn TodoEditForm(store: PageStore) -> impl IntoView {
    let actions = use_todo_actions();
    let title_ref = NodeRef::<html::Input>::new();

    // Focus and select the title once the input is mounted
    Effect::new(move |_| {
        if let Some(input) = title_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let draft = move || store.edit().get().unwrap_or_default();

    let on_title_key = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            actions.save_edit.run(());
        }
        "Escape" => actions.cancel_edit.run(()),
        _ => {}
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions.save_edit.run(());
    };

    view! {
        <form class="todo-edit" on:submit=submit>
            <input
                type="text"
                class="todo-edit-title"
                node_ref=title_ref
                prop:value=move || draft().title
                on:input=move |ev| actions.edit_title.run(event_target_value(&ev))
                on:keydown=on_title_key
            />
            <textarea
                class="todo-edit-description"
                rows="2"
                prop:value=move || draft().description
                on:input=move |ev| actions.edit_description.run(event_target_value(&ev))
            ></textarea>
            <label class="todo-edit-completed">
                <input
                    type="checkbox"
                    prop:checked=move || draft().is_completed
                    on:change=move |ev| actions.edit_completed.run(event_target_checked(&ev))
                />
                "Mark Completed"
            </label>
            <div class="todo-buttons">
                <button type="submit" class="save-btn">"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| actions.cancel_edit.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
