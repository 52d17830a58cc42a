//! Business logic between the controllers and the repositories.
//!
//! Services borrow the shared `DatabaseConnection`, enforce the domain rules
//! (ownership, canon protection, friendship state) and return domain models.

pub mod auth;
pub mod friendship;
pub mod leaderboard;
pub mod movie;
pub mod password;
pub mod reel_progress;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
