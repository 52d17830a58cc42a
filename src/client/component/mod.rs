pub mod header;
pub mod layout;
pub mod movie_card;
pub mod page;
pub mod protected_layout;
pub mod star_rating;

pub use header::Header;
pub use layout::Layout;
pub use movie_card::MovieCard;
pub use page::Page;
pub use protected_layout::RequiresLoggedIn;
pub use star_rating::StarRating;
