pub use super::friendship::Entity as Friendship;
pub use super::movie::Entity as Movie;
pub use super::reel_progress::Entity as ReelProgress;
pub use super::user::Entity as User;
