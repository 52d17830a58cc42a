use dioxus::prelude::*;

use crate::client::{
    component::Page, constant::SITE_NAME, model::auth::AuthContext, router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::register, model::user::RegisterUserDto};

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::Profile {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if password() != confirm_password() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        is_submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let mut auth = auth;
            let payload = RegisterUserDto {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };

            match register(payload).await {
                Ok(result) => auth.sign_in(result),
                Err(err) => error.set(Some(err.message)),
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex justify-center items-center",
            form {
                class: "card bg-base-200 w-full max-w-sm",
                onsubmit: on_submit,
                div {
                    class: "card-body gap-3",
                    h1 { class: "card-title text-2xl", "Create an account" }
                    if let Some(message) = error() {
                        div { class: "alert alert-error", "{message}" }
                    }
                    input {
                        class: "input w-full",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: "{confirm_password}",
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                    p {
                        class: "text-xs opacity-60",
                        "At least 8 characters with lowercase, uppercase, a number and a special character."
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_submitting(),
                        "Register"
                    }
                    p {
                        class: "text-sm",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Login" }
                    }
                }
            }
        }
    }
}
