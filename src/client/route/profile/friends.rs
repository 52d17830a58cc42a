use std::collections::HashMap;

use dioxus::prelude::*;

use crate::{
    client::model::{auth::AuthContext, error::ApiError},
    model::{friendship::FriendshipDto, user::UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::{
    friendship::{accept_friend_request, get_my_friendships, remove_friendship, send_friend_request},
    user::get_all_users,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[derive(Clone, Copy, PartialEq)]
enum FriendAction {
    Send,
    Accept,
    Remove,
}

#[component]
pub fn FriendsSection(user_id: i32) -> Element {
    let auth = use_context::<AuthContext>();

    let mut friendships = use_signal(|| None::<Vec<FriendshipDto>>);
    let mut users = use_signal(Vec::<UserDto>::new);
    let mut error = use_signal(|| None::<ApiError>);
    let mut notice = use_signal(|| None::<String>);
    let mut selected = use_signal(String::new);
    let mut refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let all_users = use_resource(move || async move {
            match auth.token() {
                Some(token) => get_all_users(&token).await,
                None => Ok(Vec::new()),
            }
        });

        use_effect(move || {
            if let Some(Ok(list)) = all_users.read_unchecked().as_ref() {
                users.set(list.clone());
            }
        });

        let mine = use_resource(move || async move {
            let _ = refetch_trigger();
            match auth.token() {
                Some(token) => get_my_friendships(&token).await,
                None => Ok(Vec::new()),
            }
        });

        use_effect(move || {
            if let Some(result) = mine.read_unchecked().as_ref() {
                match result {
                    Ok(list) => {
                        friendships.set(Some(list.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch friendships: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    let mut run = move |action: FriendAction, other_user: i32| {
        notice.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            let Some(token) = auth.token() else {
                return;
            };

            let result = match action {
                FriendAction::Send => send_friend_request(&token, other_user).await,
                FriendAction::Accept => accept_friend_request(&token, other_user).await,
                FriendAction::Remove => remove_friendship(&token, other_user).await,
            };

            match result {
                Ok(_) => {
                    selected.set(String::new());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => notice.set(Some(err.message)),
            }
        });
    };

    let names: HashMap<i32, String> = users
        .read()
        .iter()
        .map(|user| (user.id, user.username.clone()))
        .collect();
    let name_of = move |id: i32| {
        names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("User #{}", id))
    };

    let list = friendships().unwrap_or_default();
    let friends: Vec<i32> = list
        .iter()
        .filter(|f| f.friend_request_accepted)
        .map(|f| f.other_user(user_id))
        .collect();
    let incoming: Vec<i32> = list
        .iter()
        .filter(|f| !f.friend_request_accepted && f.requester_user_id != user_id)
        .map(|f| f.other_user(user_id))
        .collect();
    let outgoing: Vec<i32> = list
        .iter()
        .filter(|f| !f.friend_request_accepted && f.requester_user_id == user_id)
        .map(|f| f.other_user(user_id))
        .collect();
    let candidates: Vec<UserDto> = users
        .read()
        .iter()
        .filter(|u| u.id != user_id && !list.iter().any(|f| f.other_user(user_id) == u.id))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Friends" }
                if let Some(message) = notice() {
                    div { class: "alert alert-warning", "{message}" }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err.message}" }
                }

                if !incoming.is_empty() {
                    div {
                        h3 { class: "font-semibold", "Friend requests" }
                        for id in incoming {
                            div {
                                key: "{id}",
                                class: "flex items-center justify-between py-1",
                                span { {name_of(id)} }
                                div {
                                    class: "flex gap-2",
                                    button {
                                        class: "btn btn-xs btn-primary",
                                        onclick: move |_| run(FriendAction::Accept, id),
                                        "Accept"
                                    }
                                    button {
                                        class: "btn btn-xs btn-ghost",
                                        onclick: move |_| run(FriendAction::Remove, id),
                                        "Decline"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    h3 { class: "font-semibold", "My friends" }
                    if friends.is_empty() {
                        p { class: "text-sm opacity-60", "No friends yet." }
                    }
                    for id in friends {
                        div {
                            key: "{id}",
                            class: "flex items-center justify-between py-1",
                            span { {name_of(id)} }
                            button {
                                class: "btn btn-xs btn-error btn-outline",
                                onclick: move |_| run(FriendAction::Remove, id),
                                "Remove"
                            }
                        }
                    }
                }

                if !outgoing.is_empty() {
                    div {
                        h3 { class: "font-semibold", "Sent requests" }
                        for id in outgoing {
                            div {
                                key: "{id}",
                                class: "flex items-center justify-between py-1",
                                span { {name_of(id)} }
                                button {
                                    class: "btn btn-xs btn-ghost",
                                    onclick: move |_| run(FriendAction::Remove, id),
                                    "Cancel"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "flex gap-2 items-center",
                    select {
                        class: "select select-sm",
                        value: "{selected}",
                        onchange: move |evt| selected.set(evt.value()),
                        option { value: "", "Add a friend..." }
                        for user in candidates {
                            option { key: "{user.id}", value: "{user.id}", "{user.username}" }
                        }
                    }
                    button {
                        class: "btn btn-sm btn-primary",
                        disabled: selected.read().is_empty(),
                        onclick: move |_| {
                            if let Ok(id) = selected.read().parse::<i32>() {
                                run(FriendAction::Send, id);
                            }
                        },
                        "Send request"
                    }
                }
            }
        }
    }
}
