//! Dashboard page shown after sign in.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The user lives only in memory,
//! so a reload lands here without one and the redirect sends the visitor
//! back to the sign-in form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{failure_message, install_unauth_redirect, use_auth_session};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = StoredValue::new_local(use_auth_session());
    let message = RwSignal::new(String::new());

    install_unauth_redirect(auth, use_navigate());

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome, {}", u.name))
            .unwrap_or_default()
    };
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    let on_sign_out = move |_| {
        if let Err(e) = session.with_value(|s| s.sign_out()) {
            message.set(failure_message(&e).to_owned());
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{greeting}</h1>
                <span class="dashboard-email">{email}</span>
                <button class="auth-button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <Show when=move || !message.get().is_empty()>
                <p class="auth-message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
