use dioxus::prelude::*;

use crate::client::{
    component::page::LoadingPage,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Renders the nested route only for signed-in users, redirecting everyone else
/// to the login page.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth.read(), AuthState::NotLoggedIn) {
            nav.push(Route::Login {});
        }
    });

    let logged_in = auth.read().is_authenticated();

    rsx! {
        if logged_in {
            Outlet::<Route> {}
        } else {
            // Loading while local storage is read or the redirect happens
            LoadingPage {}
        }
    }
}
