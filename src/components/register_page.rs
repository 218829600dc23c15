//! Register Page Component
//!
//! Account creation form. Success sends the user to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use todo_sync::session::REGISTERED_NOTICE;
use todo_sync::{HttpAuthApi, Registration, Route};

use crate::context::use_app_context;
use crate::notice;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = StoredValue::new(use_navigate());

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);

        let form = Registration {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let api = HttpAuthApi::new(&ctx.config());
        set_pending.set(true);
        spawn_local(async move {
            match ctx.sessions().register(&api, &form).await {
                Ok(session) => {
                    if let Some(session) = session {
                        ctx.sign_in(session);
                    }
                    notice::alert(REGISTERED_NOTICE);
                    navigate.with_value(|nav| nav(Route::Login.path(), Default::default()));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Register"</h2>
                <form class="auth-form" on:submit=submit autocomplete="off">
                    <input
                        type="text"
                        name="userName"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
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
                    <input
                        type="password"
                        name="reenterPassword"
                        placeholder="Re-enter Password"
                        required
                        minlength="6"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <div class="auth-error">{msg}</div> })}
                    <button type="submit" disabled=move || pending.get()>"Register"</button>
                </form>
                <div class="auth-switch">
                    "Already have an account? "
                    <a href=Route::Login.path()>"Login"</a>
                </div>
            </div>
        </div>
    }
}
