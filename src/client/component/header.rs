use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaFilm, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let username = auth.read().user().map(|user| user.username.clone());

    let on_logout = move |_| {
        spawn(async move {
            #[cfg(feature = "web")]
            if let Some(token) = auth.token() {
                if let Err(err) = logout(&token).await {
                    tracing::warn!("Logout request failed: {}", err);
                }
            }

            auth.sign_out();
            nav.push(Route::Home {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaFilm
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
            nav {
                class: "hidden md:flex items-center gap-4",
                Link { to: Route::ReelCanon {}, class: "link link-hover", "Reel Canon" }
                Link { to: Route::Leaderboard {}, class: "link link-hover", "Leaderboard" }
                Link { to: Route::About {}, class: "link link-hover", "About" }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(username) = username {
                Link {
                    to: Route::Profile {},
                    class: "btn btn-ghost",
                    "{username}"
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_logout,
                    "Logout"
                }
            } else {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
                Link {
                    to: Route::Register {},
                    class: "btn btn-primary",
                    "Register"
                }
            }
        }
    })
}
