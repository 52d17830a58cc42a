use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            MovieCard, Page,
        },
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
        router::Route,
    },
    model::movie::MovieDto,
};

#[cfg(feature = "web")]
use crate::{
    client::api::{movie::get_reel_canon, reel_progress::{add_reel_progress, get_reel_progress}},
    model::reel_progress::AddReelProgressDto,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn ReelCanon() -> Element {
    let auth = use_context::<AuthContext>();

    let mut movies = use_signal(|| None::<Vec<MovieDto>>);
    let mut in_reel = use_signal(Vec::<i32>::new);
    let mut error = use_signal(|| None::<ApiError>);
    let mut notice = use_signal(|| None::<String>);
    let mut refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let canon = use_resource(get_reel_canon);

        use_effect(move || {
            if let Some(result) = canon.read_unchecked().as_ref() {
                match result {
                    Ok(list) => movies.set(Some(list.clone())),
                    Err(err) => {
                        tracing::error!("Failed to fetch Reel Canon: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        // Re-runs when the session changes or a movie is added
        let reel = use_resource(move || async move {
            let _ = refetch_trigger();
            match auth.token() {
                Some(token) => get_reel_progress(&token).await.map(Some),
                None => Ok(None),
            }
        });

        use_effect(move || match reel.read_unchecked().as_ref() {
            Some(Ok(Some(entries))) => in_reel.set(entries.iter().map(|e| e.movie).collect()),
            Some(Ok(None)) => in_reel.set(Vec::new()),
            Some(Err(err)) => tracing::warn!("Failed to fetch reel progress: {}", err),
            None => {}
        });
    }

    let mut add_to_reel = move |movie_id: i32| {
        notice.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let Some(token) = auth.token() else {
                return;
            };
            let payload = AddReelProgressDto {
                movie: movie_id,
                rating: None,
                is_watched: Some(true),
            };

            match add_reel_progress(&token, payload).await {
                Ok(added) => {
                    notice.set(Some(added.message));
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => notice.set(Some(err.message)),
            }
        });
    };

    let logged_in = auth.read().is_authenticated();

    rsx! {
        Title { "Reel Canon | {SITE_NAME}" }
        if let Some(list) = movies() {
            Page {
                class: "flex flex-col gap-4",
                div {
                    class: "flex flex-wrap items-end justify-between gap-2",
                    div {
                        h1 { class: "text-2xl font-bold", "The Reel Canon" }
                        p {
                            class: "opacity-75",
                            "{in_reel.read().len()} of {list.len()} watched"
                        }
                    }
                    if !logged_in {
                        p {
                            class: "text-sm",
                            Link { to: Route::Login {}, class: "link", "Log in" }
                            " to start tracking your progress."
                        }
                    }
                }
                if let Some(message) = notice() {
                    div { class: "alert alert-info", "{message}" }
                }
                div {
                    class: "reel-grid",
                    for movie in list {
                        MovieCard {
                            key: "{movie.id}",
                            movie: movie.clone(),
                            if in_reel.read().contains(&movie.id) {
                                span { class: "badge badge-success", "Watched" }
                            } else if logged_in {
                                button {
                                    class: "btn btn-sm btn-primary",
                                    onclick: move |_| add_to_reel(movie.id),
                                    "Add to my reel"
                                }
                            }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
