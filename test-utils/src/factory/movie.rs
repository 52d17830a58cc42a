//! Movie factory for creating test movie entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test movies with customizable fields.
///
/// Defaults to a user-created (non canon) movie with no owner.
pub struct MovieFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    year: String,
    genre: Vec<String>,
    imdb_id: String,
    is_reel_canon: bool,
    created_by: Option<i32>,
}

impl<'a> MovieFactory<'a> {
    /// Creates a new MovieFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Movie {id}"`
    /// - year: `"1999"`
    /// - genre: `["Drama"]`
    /// - imdb_id: `"tt{id:07}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Movie {}", id),
            year: "1999".to_string(),
            genre: vec!["Drama".to_string()],
            imdb_id: format!("tt{:07}", id),
            is_reel_canon: false,
            created_by: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn genre(mut self, genre: &[&str]) -> Self {
        self.genre = genre.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn imdb_id(mut self, imdb_id: impl Into<String>) -> Self {
        self.imdb_id = imdb_id.into();
        self
    }

    /// Marks the movie as part of the Reel Canon.
    pub fn reel_canon(mut self, is_reel_canon: bool) -> Self {
        self.is_reel_canon = is_reel_canon;
        self
    }

    /// Sets the owning user.
    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Builds and inserts the movie entity into the database.
    pub async fn build(self) -> Result<entity::movie::Model, DbErr> {
        let now = Utc::now();
        entity::movie::ActiveModel {
            title: ActiveValue::Set(self.title),
            year: ActiveValue::Set(self.year),
            director: ActiveValue::Set("Test Director".to_string()),
            genre: ActiveValue::Set(json!(self.genre)),
            plot: ActiveValue::Set(None),
            actors: ActiveValue::Set(json!(["Lead Actor"])),
            imdb_id: ActiveValue::Set(self.imdb_id),
            poster: ActiveValue::Set("https://posters.example.com/poster.jpg".to_string()),
            is_reel_canon: ActiveValue::Set(self.is_reel_canon),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non canon movie with default values.
pub async fn create_movie(db: &DatabaseConnection) -> Result<entity::movie::Model, DbErr> {
    MovieFactory::new(db).build().await
}

/// Creates a Reel Canon movie with default values.
pub async fn create_canon_movie(db: &DatabaseConnection) -> Result<entity::movie::Model, DbErr> {
    MovieFactory::new(db).reel_canon(true).build().await
}
