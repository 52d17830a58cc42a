use dioxus::prelude::*;

use crate::{client::model::auth::AuthContext, model::user::UserDto};

#[cfg(feature = "web")]
use crate::{
    client::api::user::{update_my_password, update_my_profile},
    model::user::{UpdatePasswordDto, UpdateProfileDto},
};

/// Username, email and password settings.
#[component]
pub fn AccountSection(user: UserDto) -> Element {
    let auth = use_context::<AuthContext>();

    let mut username = use_signal(|| user.username.clone());
    let mut email = use_signal(|| user.email.clone());
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut profile_notice = use_signal(|| None::<String>);
    let mut password_notice = use_signal(|| None::<String>);

    let on_profile_submit = move |evt: FormEvent| {
        evt.prevent_default();
        profile_notice.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let mut auth = auth;
            let Some(token) = auth.token() else {
                return;
            };
            let payload = UpdateProfileDto {
                username: Some(username().trim().to_string()),
                email: Some(email().trim().to_string()),
            };

            match update_my_profile(&token, payload).await {
                Ok(updated) => {
                    auth.update_user(updated);
                    profile_notice.set(Some("Profile updated".to_string()));
                }
                Err(err) => profile_notice.set(Some(err.message)),
            }
        });
    };

    let on_password_submit = move |evt: FormEvent| {
        evt.prevent_default();
        password_notice.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let Some(token) = auth.token() else {
                return;
            };
            let payload = UpdatePasswordDto {
                current_password: Some(current_password()),
                new_password: new_password(),
            };

            match update_my_password(&token, payload).await {
                Ok(result) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    password_notice.set(Some(result.message));
                }
                Err(err) => password_notice.set(Some(err.message)),
            }
        });
    };

    rsx! {
        div {
            class: "grid md:grid-cols-2 gap-6",
            form {
                class: "card bg-base-200",
                onsubmit: on_profile_submit,
                div {
                    class: "card-body gap-3",
                    h2 { class: "card-title", "Profile" }
                    if let Some(message) = profile_notice() {
                        p { class: "text-sm", "{message}" }
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
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                }
            }
            form {
                class: "card bg-base-200",
                onsubmit: on_password_submit,
                div {
                    class: "card-body gap-3",
                    h2 { class: "card-title", "Password" }
                    if let Some(message) = password_notice() {
                        p { class: "text-sm", "{message}" }
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Current password",
                        value: "{current_password}",
                        oninput: move |evt| current_password.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "New password",
                        value: "{new_password}",
                        oninput: move |evt| new_password.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Change password" }
                }
            }
        }
    }
}
