mod friendship;
mod user;
