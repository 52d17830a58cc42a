use dioxus::prelude::*;

use crate::client::{
    component::Page, constant::SITE_NAME, model::auth::AuthContext, router::Route,
};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let username = auth.read().user().map(|user| user.username.clone());

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col gap-8 items-center justify-center text-center",
            div {
                class: "flex flex-col gap-4 max-w-2xl",
                h1 { class: "text-4xl font-bold", {SITE_NAME} }
                p {
                    class: "text-lg opacity-80",
                    "One hundred films. One century of cinema. How many have you seen?"
                }
            }
            div {
                class: "flex gap-4",
                Link { to: Route::ReelCanon {}, class: "btn btn-primary", "Browse the Reel Canon" }
                if let Some(username) = username {
                    Link { to: Route::Profile {}, class: "btn btn-outline", "{username}'s reel" }
                } else {
                    Link { to: Route::Register {}, class: "btn btn-outline", "Start tracking" }
                }
            }
        }
    }
}
