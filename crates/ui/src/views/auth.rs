use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, AuthState};
use crate::routes::Route;
use crate::vm::{AuthMode, auth_error_message};

const SIGNED_UP: &str = "Account created! You can log in now.";

#[component]
pub fn AuthView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();

    let mut mode = use_signal(AuthMode::default);
    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut secret = use_signal(String::new);
    let busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    use_effect(move || {
        if auth.is_signed_in() {
            navigator.replace(Route::Home {});
        }
    });

    let on_submit = {
        let authenticator = ctx.authenticator();
        let registrar = ctx.registrar();
        move |evt: FormEvent| {
            evt.prevent_default();
            if busy() {
                return;
            }
            let authenticator = authenticator.clone();
            let registrar = registrar.clone();
            let current_mode = mode();
            let name = username();
            let display = display_name();
            let pass = secret();

            let mut auth = auth;
            let mut busy = busy;
            let mut error = error;
            let mut notice = notice;
            let mut mode = mode;
            let mut secret = secret;
            busy.set(true);
            error.set(None);
            notice.set(None);

            spawn(async move {
                match current_mode {
                    AuthMode::Login => match authenticator.login(&name, &pass).await {
                        Ok(account) => {
                            auth.sign_in(account);
                            navigator.replace(Route::Home {});
                        }
                        Err(err) => error.set(Some(auth_error_message(&err))),
                    },
                    AuthMode::SignUp => match registrar.sign_up(&name, &display, &pass).await {
                        Ok(_) => {
                            mode.set(AuthMode::Login);
                            secret.set(String::new());
                            notice.set(Some(SIGNED_UP.to_string()));
                        }
                        Err(err) => error.set(Some(auth_error_message(&err))),
                    },
                }
                busy.set(false);
            });
        }
    };

    let current = mode();
    let (switch_text, switch_link) = current.switch_prompt();
    let submit_label = current.submit_label(busy());
    let secret_autocomplete = match current {
        AuthMode::Login => "current-password",
        AuthMode::SignUp => "new-password",
    };

    rsx! {
        section { class: "page auth",
            div { class: "auth-card",
                h2 { "{current.title()}" }
                form { onsubmit: on_submit,
                    label { r#for: "auth-username", "Username" }
                    input {
                        id: "auth-username",
                        value: "{username}",
                        autocomplete: "username",
                        required: true,
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                    if current == AuthMode::SignUp {
                        label { r#for: "auth-display-name", "Name" }
                        input {
                            id: "auth-display-name",
                            value: "{display_name}",
                            oninput: move |evt: FormEvent| display_name.set(evt.value()),
                        }
                    }
                    label { r#for: "auth-secret", "Password" }
                    input {
                        id: "auth-secret",
                        r#type: "password",
                        value: "{secret}",
                        autocomplete: "{secret_autocomplete}",
                        minlength: "6",
                        required: true,
                        oninput: move |evt: FormEvent| secret.set(evt.value()),
                    }
                    button { r#type: "submit", disabled: busy(), "{submit_label}" }
                    if let Some(message) = error() {
                        p { class: "error", "{message}" }
                    }
                    if let Some(message) = notice() {
                        p { class: "notice", "{message}" }
                    }
                }
                p { class: "switch",
                    "{switch_text} "
                    button {
                        class: "link",
                        onclick: move |_| {
                            mode.set(current.toggled());
                            error.set(None);
                            notice.set(None);
                        },
                        "{switch_link}"
                    }
                }
            }
        }
    }
}
