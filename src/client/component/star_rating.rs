use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaStar, Icon};

/// Five clickable stars; the first `rating` are highlighted.
#[component]
pub fn StarRating(rating: Option<i32>, disabled: bool, on_rate: EventHandler<i32>) -> Element {
    let current = rating.unwrap_or(0);

    rsx!(
        div {
            class: "flex gap-1",
            for star in 1..=5 {
                button {
                    key: "{star}",
                    r#type: "button",
                    class: if star <= current { "text-warning" } else { "opacity-30" },
                    disabled,
                    title: "{star} stars",
                    onclick: move |_| on_rate.call(star),
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaStar
                    }
                }
            }
        }
    )
}
