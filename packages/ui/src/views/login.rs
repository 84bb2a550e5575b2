//! Onboarding login screen.

use dioxus::prelude::*;
use flow::{FormCell, LoginForm};

use crate::auth::{use_identity, FormSignal};
use crate::icons::{FaEnvelope, FaFacebookF, FaGoogle};
use crate::Icon;

/// Login screen with Google, Facebook (placeholder) and email/password sign-in.
#[component]
pub fn LoginScreen() -> Element {
    let identity = use_identity();
    let mut form = use_signal(LoginForm::default);
    let cell = FormSignal(form);

    // A sign-in still in flight when the screen goes away must not settle later.
    use_drop(move || {
        cell.with_form(LoginForm::abandon);
    });

    let on_google = {
        let identity = identity.clone();
        move |_| {
            let identity = identity.clone();
            async move { flow::submit_google(&cell, &identity).await }
        }
    };

    let on_email = move |evt: FormEvent| {
        evt.prevent_default();
        let identity = identity.clone();
        async move { flow::submit_email(&cell, &identity).await }
    };

    let on_facebook = move |_| form.write().facebook();

    let (email, password, loading, error, notice) = {
        let state = form.read();
        (
            state.email.clone(),
            state.password.clone(),
            state.is_loading(),
            state.error().map(str::to_string),
            state.notice().map(str::to_string),
        )
    };

    rsx! {
        div {
            class: "onboarding",
            div {
                class: "onboarding-card",
                section {
                    class: "onboarding-intro",
                    h1 {
                        "Sign in to "
                        span { class: "gradient-text", "QuantumYou" }
                    }
                    p {
                        "Create your digital twin, save your progress, and unlock quantum "
                        "timelines across all your devices."
                    }
                    ul {
                        li { "• Safe for children & teens" }
                        li { "• No financial questions for minors" }
                        li { "• 100% free to explore your Future You" }
                    }
                }

                section {
                    class: "login-panel",
                    h2 { "Log in to continue" }

                    button {
                        r#type: "button",
                        class: "auth-btn auth-btn--google",
                        disabled: loading,
                        onclick: on_google,
                        Icon { icon: FaGoogle, width: 16, height: 16 }
                        if loading { "Connecting to Google…" } else { "Continue with Google" }
                    }

                    button {
                        r#type: "button",
                        class: "auth-btn auth-btn--facebook",
                        disabled: loading,
                        onclick: on_facebook,
                        Icon { icon: FaFacebookF, width: 16, height: 16 }
                        "Continue with Facebook"
                    }

                    div {
                        class: "divider",
                        div { class: "divider-line" }
                        span { "OR" }
                        div { class: "divider-line" }
                    }

                    form {
                        class: "email-form",
                        onsubmit: on_email,
                        label {
                            class: "field",
                            span { "Email" }
                            input {
                                r#type: "email",
                                autocomplete: "email",
                                value: "{email}",
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        label {
                            class: "field",
                            span { "Password" }
                            input {
                                r#type: "password",
                                autocomplete: "current-password",
                                value: "{password}",
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                        }

                        if let Some(error) = error {
                            div { class: "form-error", role: "alert", "{error}" }
                        }
                        if let Some(notice) = notice {
                            div { class: "form-notice", role: "status", "{notice}" }
                        }

                        button {
                            r#type: "submit",
                            class: "auth-btn auth-btn--email",
                            disabled: loading,
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            if loading { "Loading…" } else { "Log in with Email" }
                        }
                    }

                    p { class: "terms", "By continuing, you agree to QuantumYou's simulation terms." }
                }
            }
        }
    }
}
