use std::collections::HashMap;

use dioxus::prelude::*;

use crate::{
    client::{
        component::StarRating,
        model::{auth::AuthContext, error::ApiError},
        router::Route,
    },
    model::{genre::favourite_genres, movie::MovieDto, reel_progress::ReelProgressDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        movie::get_reel_canon,
        reel_progress::{delete_reel_progress, get_reel_progress, update_reel_progress},
    },
    model::reel_progress::UpdateReelProgressDto,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// The signed-in user's watched movies with ratings and favourite genres.
#[component]
pub fn ReelSection() -> Element {
    let auth = use_context::<AuthContext>();

    let mut entries = use_signal(|| None::<Vec<ReelProgressDto>>);
    let mut movies = use_signal(Vec::<MovieDto>::new);
    let mut error = use_signal(|| None::<ApiError>);
    let mut notice = use_signal(|| None::<String>);
    let mut refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let canon = use_resource(get_reel_canon);

        use_effect(move || {
            if let Some(Ok(list)) = canon.read_unchecked().as_ref() {
                movies.set(list.clone());
            }
        });

        let reel = use_resource(move || async move {
            let _ = refetch_trigger();
            match auth.token() {
                Some(token) => get_reel_progress(&token).await,
                None => Ok(Vec::new()),
            }
        });

        use_effect(move || {
            if let Some(result) = reel.read_unchecked().as_ref() {
                match result {
                    Ok(list) => {
                        entries.set(Some(list.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch reel progress: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    let mut set_rating = move |movie_id: i32, rating: Option<i32>| {
        notice.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let Some(token) = auth.token() else {
                return;
            };
            let payload = UpdateReelProgressDto {
                rating: Some(rating),
                is_watched: None,
            };

            match update_reel_progress(&token, movie_id, payload).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => notice.set(Some(err.message)),
            }
        });
    };

    let mut remove = move |movie_id: i32| {
        notice.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let Some(token) = auth.token() else {
                return;
            };

            match delete_reel_progress(&token, movie_id).await {
                Ok(result) => {
                    notice.set(Some(result.message));
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => notice.set(Some(err.message)),
            }
        });
    };

    let titles: HashMap<i32, String> = movies
        .read()
        .iter()
        .map(|movie| (movie.id, format!("{} ({})", movie.title, movie.year)))
        .collect();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "My Reel" }
                if let Some(message) = notice() {
                    div { class: "alert alert-info", "{message}" }
                }
                if let Some(list) = entries() {
                    if list.is_empty() {
                        p {
                            class: "opacity-60",
                            "Your reel is empty. Pick something from the "
                            Link { to: Route::ReelCanon {}, class: "link", "Reel Canon" }
                            "."
                        }
                    } else {
                        FavouriteGenres { entries: list.clone(), movies: movies() }
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Movie" }
                                    th { "Rating" }
                                    th {}
                                }
                            }
                            tbody {
                                for entry in list {
                                    tr {
                                        key: "{entry.movie}",
                                        td {
                                            {titles.get(&entry.movie).cloned().unwrap_or_else(|| format!("Movie #{}", entry.movie))}
                                        }
                                        td {
                                            StarRating {
                                                rating: entry.rating,
                                                disabled: false,
                                                on_rate: move |stars| set_rating(entry.movie, Some(stars)),
                                            }
                                        }
                                        td {
                                            class: "flex gap-2 justify-end",
                                            if entry.rating.is_some() {
                                                button {
                                                    class: "btn btn-xs btn-ghost",
                                                    onclick: move |_| set_rating(entry.movie, None),
                                                    "Clear rating"
                                                }
                                            }
                                            button {
                                                class: "btn btn-xs btn-error btn-outline",
                                                onclick: move |_| remove(entry.movie),
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else if let Some(err) = error() {
                    div { class: "alert alert-error", "{err.message}" }
                } else {
                    span { class: "loading loading-spinner" }
                }
            }
        }
    }
}

#[component]
fn FavouriteGenres(entries: Vec<ReelProgressDto>, movies: Vec<MovieDto>) -> Element {
    let stats = favourite_genres(&entries, &movies);

    rsx! {
        div {
            h3 { class: "font-semibold", "Favourite genres" }
            if stats.is_empty() {
                p { class: "text-sm opacity-60", "Rate a few movies to see your favourite genres." }
            } else {
                ul {
                    class: "text-sm",
                    for (index, stat) in stats.iter().enumerate() {
                        li { key: "{stat.genre}", {stat.summary(index + 1)} }
                    }
                }
            }
        }
    }
}
