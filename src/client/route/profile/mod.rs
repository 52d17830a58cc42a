mod account;
mod friends;
mod reel;

use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::AuthContext,
};

use self::{account::AccountSection, friends::FriendsSection, reel::ReelSection};

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();
    let Some(user) = auth.read().user().cloned() else {
        return rsx! { LoadingPage {} };
    };

    rsx! {
        Title { "{user.username} | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-5xl flex flex-col gap-6",
                div {
                    class: "flex items-center gap-3",
                    h1 { class: "text-2xl font-bold", "{user.username}" }
                    if user.is_admin {
                        span { class: "badge badge-secondary", "Admin" }
                    }
                }
                p {
                    class: "opacity-60 text-sm",
                    {format!("{} · member since {}", user.email, user.created_at.format("%B %Y"))}
                }
                ReelSection {}
                FriendsSection { user_id: user.id }
                AccountSection { user: user.clone() }
            }
        }
    }
}
