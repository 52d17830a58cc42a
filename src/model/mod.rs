//! DTOs shared between the server API and the web client.

pub mod api;
pub mod friendship;
pub mod genre;
pub mod leaderboard;
pub mod movie;
pub mod reel_progress;
pub mod user;
