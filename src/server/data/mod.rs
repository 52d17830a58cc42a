//! Database repository layer for all domain entities.
//!
//! Repositories borrow the shared `DatabaseConnection`, use SeaORM entity models
//! internally and return domain models so the service layer never sees entities.

pub mod friendship;
pub mod movie;
pub mod reel_progress;
pub mod user;

#[cfg(test)]
mod test;
