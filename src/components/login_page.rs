//! Login Page Component
//!
//! Email/password form; a successful login opens the todo page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use todo_sync::{Credentials, HttpAuthApi, Route};

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new(use_navigate());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);
        set_pending.set(true);

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let api = HttpAuthApi::new(&ctx.config());
        spawn_local(async move {
            match ctx.sessions().login(&api, &credentials).await {
                Ok(session) => {
                    ctx.sign_in(session);
                    navigate.with_value(|nav| nav(Route::Todos.path(), Default::default()));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=submit autocomplete="off">
                    <input
                        type="email"
                        name="userEmail"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        name="password"
                        placeholder="Password"
                        required
                        minlength="6"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <div class="auth-error">{msg}</div> })}
                    <button type="submit" disabled=move || pending.get()>"Sign In"</button>
                </form>
                <div class="auth-switch">
                    "Don't have an account? "
                    <a href=Route::Register.path()>"Register"</a>
                </div>
            </div>
        </div>
    }
}
