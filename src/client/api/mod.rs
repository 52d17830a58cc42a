#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod friendship;
#[cfg(feature = "web")]
pub mod leaderboard;
#[cfg(feature = "web")]
pub mod movie;
#[cfg(feature = "web")]
pub mod reel_progress;
#[cfg(feature = "web")]
pub mod user;
