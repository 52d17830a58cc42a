//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let movie = factory::create_movie(&db).await?;
//!     let entry = factory::create_reel_progress(&db, user.id, movie.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("projectionist")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let canon = factory::movie::MovieFactory::new(&db)
//!     .title("Vertigo")
//!     .reel_canon(true)
//!     .build()
//!     .await?;
//! ```

pub mod friendship;
pub mod helpers;
pub mod movie;
pub mod reel_progress;
pub mod user;

pub use friendship::{create_accepted_friendship, create_friendship};
pub use movie::{create_canon_movie, create_movie};
pub use reel_progress::create_reel_progress;
pub use user::{create_admin, create_user};
