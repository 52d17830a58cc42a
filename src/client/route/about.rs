use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn About() -> Element {
    rsx! {
        Title { "About | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "max-w-3xl flex flex-col gap-4",
                h1 { class: "text-3xl font-bold", "About {SITE_NAME}" }
                p {
                    "The Reel Canon is a curated list of one hundred films spanning the twentieth "
                    "century. Mark the films you have watched, rate them out of five stars and see "
                    "which genres you keep coming back to."
                }
                p {
                    "Add friends to follow each other's progress and climb the "
                    Link { to: Route::Leaderboard {}, class: "link", "leaderboard" }
                    " by working your way through the canon."
                }
                p {
                    class: "text-sm opacity-60",
                    "Film information and posters are provided for reference only."
                }
            }
        }
    }
}
