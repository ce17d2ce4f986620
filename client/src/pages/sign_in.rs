//! Sign-in page: email + password form posting to `/session`.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::util::auth::{failure_message, use_auth_session};

const MISSING_FIELDS: &str = "Enter your email and password.";

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = StoredValue::new_local(use_auth_session());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_in_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(input) => input,
                Err(msg) => {
                    message.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        message.set(String::new());

        let session = session.get_value();
        leptos::task::spawn_local(async move {
            // On success the holder has already navigated away.
            if let Err(e) = session.sign_in(&email_value, &password_value).await {
                message.set(failure_message(&e).to_owned());
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <a href="/signup" class="auth-link">
                    "No account yet? Sign up"
                </a>
            </div>
        </div>
    }
}
