//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the field
//! rules checked before anything reaches the database.

pub mod friendship;
pub mod leaderboard;
pub mod movie;
pub mod reel_progress;
pub mod user;
