//! HTTP handlers, one module per resource.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs to parameters, call a
//! service and convert the resulting domain models back to DTOs.

pub mod auth;
pub mod friendship;
pub mod leaderboard;
pub mod movie;
pub mod reel_progress;
pub mod user;
