mod auth;
mod leaderboard;
mod movie;
mod user;
