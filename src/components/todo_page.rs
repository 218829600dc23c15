//! Todo Page Component
//!
//! Owns the board for this mount and wires every user action to it. Each
//! action runs one round-trip; its outcome is mirrored into the page store.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use todo_sync::{DeleteOutcome, HttpTodoApi, Route, SyncError, TodoBoard, TodoId};

use crate::components::{NavBar, NewTodoForm, TodoList};
use crate::context::{use_app_context, TodoActions};
use crate::notice;
use crate::store::{new_page_store, store_sync};

const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new(use_navigate());

    // Entry guard: no session, no client, no requests
    let session = ctx.refresh_session();
    let config = ctx.config();
    let board = match TodoBoard::mount(session.as_ref(), |s| HttpTodoApi::new(&config, s)) {
        Ok(board) => StoredValue::new_local(Rc::new(board)),
        Err(route) => return view! { <Redirect path=route.path() /> }.into_any(),
    };
    let store = new_page_store();

    // Responses may land after the page is gone
    let refresh = move |b: &TodoBoard<HttpTodoApi>| {
        if !board.is_disposed() {
            store_sync(&store, b.snapshot());
        }
    };

    let report = move |error: SyncError| {
        if error.is_session_invalid() {
            ctx.invalidate();
            navigate_to(navigate, Route::Login);
        } else {
            notice::alert(&error.to_string());
        }
    };

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            let b = board.get_value();
            let result = b.load().await;
            refresh(&b);
            match result {
                Ok(count) => tracing::debug!("todo page ready with {} todos", count),
                Err(e) if e.is_session_invalid() => report(e),
                // Already logged by the board; the list just stays empty
                Err(_) => {}
            }
        });
    });

    let actions = TodoActions {
        compose_title: Callback::new(move |title: String| {
            board.with_value(|b| {
                b.set_compose_title(title);
                refresh(b);
            });
        }),
        compose_description: Callback::new(move |description: String| {
            board.with_value(|b| {
                b.set_compose_description(description);
                refresh(b);
            });
        }),
        create: Callback::new(move |_: ()| {
            spawn_local(async move {
                let b = board.get_value();
                let result = b.create().await;
                refresh(&b);
                if let Err(e) = result {
                    report(e);
                }
            });
        }),
        toggle: Callback::new(move |id: TodoId| {
            spawn_local(async move {
                let b = board.get_value();
                let result = b.toggle(id).await;
                refresh(&b);
                if let Err(e) = result {
                    report(e);
                }
            });
        }),
        begin_edit: Callback::new(move |id: TodoId| {
            board.with_value(|b| {
                b.begin_edit(id);
                refresh(b);
            });
        }),
        edit_title: Callback::new(move |title: String| {
            board.with_value(|b| {
                b.set_edit_title(title);
                refresh(b);
            });
        }),
        edit_description: Callback::new(move |description: String| {
            board.with_value(|b| {
                b.set_edit_description(description);
                refresh(b);
            });
        }),
        edit_completed: Callback::new(move |completed: bool| {
            board.with_value(|b| {
                b.set_edit_completed(completed);
                refresh(b);
            });
        }),
        save_edit: Callback::new(move |_: ()| {
            spawn_local(async move {
                let b = board.get_value();
                let result = b.commit_edit().await;
                refresh(&b);
                if let Err(e) = result {
                    report(e);
                }
            });
        }),
        cancel_edit: Callback::new(move |_: ()| {
            board.with_value(|b| {
                b.cancel_edit();
                refresh(b);
            });
        }),
        delete: Callback::new(move |id: TodoId| {
            spawn_local(async move {
                let b = board.get_value();
                let result = b.delete(id, |_| notice::confirm(DELETE_PROMPT)).await;
                refresh(&b);
                match result {
                    Ok(DeleteOutcome::Deleted) => tracing::debug!("deleted todo {}", id),
                    Ok(_) => {}
                    Err(e) => report(e),
                }
            });
        }),
        clear_completed: Callback::new(move |_: ()| {
            spawn_local(async move {
                let b = board.get_value();
                let result = b.clear_completed().await;
                refresh(&b);
                match result {
                    Ok(cleared) if !cleared.failed.is_empty() => {
                        tracing::warn!(
                            "{} of {} completed todos may still exist on the server",
                            cleared.failed.len(),
                            cleared.attempted
                        );
                    }
                    Ok(_) => {}
                    Err(e) => report(e),
                }
            });
        }),
        logout: Callback::new(move |_: ()| {
            board.with_value(|b| b.close());
            ctx.logout();
            navigate_to(navigate, Route::Login);
        }),
    };
    provide_context(actions);

    view! {
        <div class="todo-page">
            <NavBar />
            <main class="todo-main">
                <NewTodoForm store=store />
                <TodoList store=store />
            </main>
        </div>
    }
    .into_any()
}

/// Navigate unless the page owning `navigate` has been unmounted
///
/// Responses can arrive after logout has torn the page down.
fn navigate_to<N>(navigate: StoredValue<N>, route: Route) -> bool
where
    N: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    navigate
        .try_with_value(|nav| nav(route.path(), NavigateOptions::default()))
        .is_some()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_navigation_after_unmount_is_skipped() {
        let owner = Owner::new();
        owner.set();

        let visited = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&visited);
        let navigate = StoredValue::new(move |path: &str, _: NavigateOptions| {
            log.lock().unwrap().push(path.to_string());
        });

        assert!(navigate_to(navigate, Route::Login));
        navigate.dispose();
        assert!(!navigate_to(navigate, Route::Login));
        assert_eq!(*visited.lock().unwrap(), vec!["/login".to_string()]);
    }
}
