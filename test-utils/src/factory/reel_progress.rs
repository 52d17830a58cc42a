//! Reel progress factory for creating test watch records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a reel progress entry for a user and movie.
pub struct ReelProgressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    movie_id: i32,
    rating: Option<i32>,
    is_watched: bool,
}

impl<'a> ReelProgressFactory<'a> {
    /// Creates a new factory for an unrated, unwatched entry.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, movie_id: i32) -> Self {
        Self {
            db,
            user_id,
            movie_id,
            rating: None,
            is_watched: false,
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn watched(mut self, is_watched: bool) -> Self {
        self.is_watched = is_watched;
        self
    }

    /// Builds and inserts the entry into the database.
    pub async fn build(self) -> Result<entity::reel_progress::Model, DbErr> {
        let now = Utc::now();
        entity::reel_progress::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            movie_id: ActiveValue::Set(self.movie_id),
            rating: ActiveValue::Set(self.rating),
            is_watched: ActiveValue::Set(self.is_watched),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unrated, unwatched entry.
pub async fn create_reel_progress(
    db: &DatabaseConnection,
    user_id: i32,
    movie_id: i32,
) -> Result<entity::reel_progress::Model, DbErr> {
    ReelProgressFactory::new(db, user_id, movie_id).build().await
}
