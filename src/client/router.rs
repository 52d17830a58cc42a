use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    About, Home, Leaderboard, Login, NotFound, Profile, ReelCanon, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/reel-canon")]
    ReelCanon {},

    #[route("/leaderboard")]
    Leaderboard {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/about")]
    About {},

    #[layout(RequiresLoggedIn)]
    #[route("/profile")]
    Profile {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
