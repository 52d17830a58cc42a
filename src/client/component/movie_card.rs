use dioxus::prelude::*;

use crate::model::movie::MovieDto;

#[component]
pub fn MovieCard(movie: MovieDto, children: Element) -> Element {
    let genres = movie.genre.join(", ");

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm",
            figure {
                img {
                    class: "h-72 w-full object-cover",
                    src: "{movie.poster}",
                    alt: "{movie.title} poster",
                }
            }
            div {
                class: "card-body p-4 gap-1",
                h3 {
                    class: "card-title text-base",
                    "{movie.title}"
                    span { class: "text-sm opacity-60", "({movie.year})" }
                }
                p { class: "text-sm", "Directed by {movie.director}" }
                if !genres.is_empty() {
                    p { class: "text-xs opacity-60", "{genres}" }
                }
                div {
                    class: "card-actions justify-end mt-2",
                    {children}
                }
            }
        }
    )
}
