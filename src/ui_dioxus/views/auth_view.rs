use dioxus::prelude::*;
use std::sync::Arc;

use crate::services::auth::{AuthMode, AuthOutcome, VERIFY_EMAIL_MESSAGE};
use crate::services::AuthService;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::state::use_app_state;

#[component]
pub fn AuthView() -> Element {
    let state = use_app_state();
    let mut session = state.session;
    let auth = use_context::<Arc<AuthService>>();
    let navigator = use_navigator();

    let mut mode = use_signal(AuthMode::default);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut notice = use_signal(|| None::<&'static str>);

    let current_mode = *mode.read();
    let is_pending = *pending.read();
    let (heading, submit_label, toggle_label) = match current_mode {
        AuthMode::SignIn => ("Sign in", "Sign in", "Need an account? Sign up"),
        AuthMode::SignUp => ("Create an account", "Sign up", "Already have an account? Sign in"),
    };
    let notice_text = *notice.read();

    let submit = move |_: MouseEvent| {
        if *pending.peek() || auth.is_pending() {
            return;
        }
        // Set before spawning so a second click in the same frame sees it.
        pending.set(true);
        let auth = auth.clone();
        let (address, secret) = (email.read().clone(), password.read().clone());
        spawn(async move {
            let result = auth.submit(current_mode, &address, &secret).await;
            if matches!(&result, Err(e) if e.is_in_flight()) {
                // The request already running owns the pending flag.
                return;
            }
            pending.set(false);
            match result {
                Ok(AuthOutcome::SignedIn(signed_in)) => {
                    session.set(Some(signed_in));
                    password.set(String::new());
                    state.success("Signed in successfully");
                    navigator.push(Route::Dashboard {});
                }
                Ok(AuthOutcome::VerificationSent) => {
                    notice.set(Some(VERIFY_EMAIL_MESSAGE));
                    state.success(VERIFY_EMAIL_MESSAGE);
                }
                Err(e) => state.error(&e),
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; justify-content: center; padding-top: 60px;",
            div {
                style: "background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 32px; width: 360px;
                       display: flex; flex-direction: column; gap: 12px;",

                h2 { style: "margin: 0 0 8px; font-size: 22px;", "{heading}" }

                if let Some(text) = notice_text {
                    div { style: "padding: 10px; background: #dcfce7; color: #166534; border-radius: 6px; font-size: 13px;", "{text}" }
                }

                input {
                    r#type: "email",
                    style: "padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px;",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    style: "padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 6px;",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    style: "padding: 10px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    disabled: is_pending,
                    onclick: submit,
                    if is_pending { "Please wait..." } else { "{submit_label}" }
                }
                button {
                    style: "border: none; background: transparent; color: #2563eb; cursor: pointer; font-size: 13px;",
                    onclick: move |_| {
                        notice.set(None);
                        mode.set(match current_mode {
                            AuthMode::SignIn => AuthMode::SignUp,
                            AuthMode::SignUp => AuthMode::SignIn,
                        });
                    },
                    "{toggle_label}"
                }
            }
        }
    }
}
