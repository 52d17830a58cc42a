//! Movie service: Reel Canon listing, lookups and user submitted movies.

use sea_orm::DatabaseConnection;
use validator::{Validate, ValidateUrl};

use crate::server::{
    data::movie::MovieRepository,
    error::AppError,
    model::{
        movie::{CreateMovieParam, Movie},
        user::User,
    },
};

pub struct MovieService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn reel_canon(&self) -> Result<Vec<Movie>, AppError> {
        Ok(MovieRepository::new(self.db).get_reel_canon().await?)
    }

    /// Finds movies by exact title. An empty result is not an error.
    pub async fn search(&self, title: Option<&str>) -> Result<Vec<Movie>, AppError> {
        let title = title.map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(AppError::bad_request("Title search parameter required"));
        }

        Ok(MovieRepository::new(self.db).find_by_title(title).await?)
    }

    pub async fn get(&self, imdb_id: &str) -> Result<Movie, AppError> {
        MovieRepository::new(self.db)
            .find_by_imdb_id(imdb_id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    /// Creates a movie owned by the caller, never part of the Reel Canon.
    ///
    /// # Returns
    /// - `Ok(Movie)` - The created movie
    /// - `Err(AppError::ValidationErr)` - A field rule failed
    /// - `Err(AppError::DbErr)` - Includes a unique violation for a known IMDb id
    pub async fn create(&self, param: CreateMovieParam) -> Result<Movie, AppError> {
        param.validate()?;

        Ok(MovieRepository::new(self.db).create(param).await?)
    }

    pub async fn update_poster(&self, imdb_id: &str, poster: String) -> Result<Movie, AppError> {
        let poster = poster.trim().to_string();
        if !poster.validate_url() {
            return Err(AppError::bad_request("Invalid URL format for poster"));
        }

        MovieRepository::new(self.db)
            .update_poster(imdb_id, poster)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    /// Deletes a movie the caller created.
    ///
    /// Reel Canon movies can never be deleted, not even by admins.
    ///
    /// # Returns
    /// - `Ok(Movie)` - The deleted movie
    /// - `Err(AppError::NotFound)` - No movie with that IMDb id
    /// - `Err(AppError::Forbidden)` - Canon movie, or created by someone else
    pub async fn delete(&self, imdb_id: &str, caller: &User) -> Result<Movie, AppError> {
        let movie_repo = MovieRepository::new(self.db);

        let Some(movie) = movie_repo.find_by_imdb_id(imdb_id).await? else {
            return Err(AppError::not_found("Movie not found"));
        };

        if movie.is_reel_canon {
            return Err(AppError::forbidden("Reel Canon movies cannot be deleted"));
        }

        if movie.created_by != Some(caller.id) {
            return Err(AppError::forbidden(
                "Cannot delete movies created by other users",
            ));
        }

        if !movie_repo.delete_non_canon(imdb_id).await? {
            return Err(AppError::not_found("Movie not found"));
        }

        Ok(movie)
    }
}
