pub mod about;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod reel_canon;
pub mod register;

pub use about::About;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use reel_canon::ReelCanon;
pub use register::Register;
