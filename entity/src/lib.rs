//! SeaORM entities for the screening room schema.

pub mod prelude;

pub mod friendship;
pub mod movie;
pub mod reel_progress;
pub mod user;
