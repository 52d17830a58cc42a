use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::user::LoginDto};

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Signed-in users have nothing to do here
    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::Profile {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        is_submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let mut auth = auth;
            let payload = LoginDto {
                email: email(),
                password: password(),
            };

            match login(payload).await {
                Ok(result) => auth.sign_in(result),
                Err(err) => error.set(Some(err.message)),
            }
            is_submitting.set(false);
        });
    };

    let state = auth.read().clone();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match state {
            AuthState::NotLoggedIn => rsx! {
                Page {
                    class: "flex justify-center items-center",
                    form {
                        class: "card bg-base-200 w-full max-w-sm",
                        onsubmit: on_submit,
                        div {
                            class: "card-body gap-3",
                            h1 { class: "card-title text-2xl", "Login" }
                            if let Some(message) = error() {
                                div { class: "alert alert-error", "{message}" }
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
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: is_submitting(),
                                "Login"
                            }
                            p {
                                class: "text-sm",
                                "No account yet? "
                                Link { to: Route::Register {}, class: "link", "Register" }
                            }
                        }
                    }
                }
            },
            _ => rsx! {
                LoadingPage {}
            },
        }
    }
}
