use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::leaderboard::LeaderboardDto,
};

#[cfg(feature = "web")]
use crate::client::api::leaderboard::get_leaderboard;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Leaderboard() -> Element {
    let mut leaderboard = use_signal(|| None::<LeaderboardDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_leaderboard);

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        leaderboard.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch leaderboard: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    rsx! {
        Title { "Leaderboard | {SITE_NAME}" }
        if let Some(data) = leaderboard() {
            Page {
                class: "flex justify-center",
                div {
                    class: "w-full max-w-3xl flex flex-col gap-4",
                    h1 { class: "text-2xl font-bold", "Leaderboard" }
                    p { class: "opacity-75", "{data.message}" }
                    if !data.entries.is_empty() {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "User" }
                                    th { "Movies in reel" }
                                }
                            }
                            tbody {
                                for (rank, entry) in data.entries.iter().enumerate() {
                                    tr {
                                        key: "{entry.user_id}",
                                        td { "{rank + 1}" }
                                        td { "{entry.username}" }
                                        td { "{entry.reel_progress_count}" }
                                    }
                                }
                            }
                        }
                    }
                    p {
                        class: "text-xs opacity-50",
                        {format!("Updated {}", data.updated_at.format("%Y-%m-%d %H:%M UTC"))}
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
