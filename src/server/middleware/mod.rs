//! Request guards and extractors shared by the controllers.

pub mod auth;
pub mod json;

#[cfg(test)]
mod test;
