use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let auth = use_context_provider(AuthContext::new);

    // Pick up a session saved by a previous visit
    #[cfg(feature = "web")]
    use_effect(move || {
        let mut auth = auth;
        auth.restore();
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Track your way through one hundred films of the twentieth century"
        }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/daisyui@5" }
        document::Script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
