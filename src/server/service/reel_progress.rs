//! Reel progress service: a user's watch records and the admin views over them.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{movie::MovieRepository, reel_progress::ReelProgressRepository, user::UserRepository},
    error::AppError,
    model::{
        movie::Movie,
        reel_progress::{
            AddReelProgressParam, AdminReelEntry, ReelProgress, UpdateReelProgressParam,
            UserReelProgress,
        },
    },
};

const NOT_IN_REEL_MESSAGE: &str = "Movie not found in your Reel Progress";

pub struct ReelProgressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReelProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's entries.
    ///
    /// # Returns
    /// - `Ok(Vec<ReelProgress>)` - At least one entry
    /// - `Err(AppError::NotFound)` - The user has no entries
    pub async fn list(&self, user_id: i32) -> Result<Vec<ReelProgress>, AppError> {
        let entries = ReelProgressRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        if entries.is_empty() {
            return Err(AppError::not_found("No Reel Progress records found"));
        }

        Ok(entries)
    }

    /// Adds a movie to the user's reel.
    ///
    /// # Returns
    /// - `Ok(Movie)` - The movie that was added
    /// - `Err(AppError::ValidationErr)` - Rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - No movie with that id
    /// - `Err(AppError::Conflict)` - The movie is already in the user's reel
    pub async fn add(&self, param: AddReelProgressParam) -> Result<Movie, AppError> {
        param.validate()?;

        let Some(movie) = MovieRepository::new(self.db)
            .find_by_id(param.movie_id)
            .await?
        else {
            return Err(AppError::not_found("Movie not found"));
        };

        let reel_repo = ReelProgressRepository::new(self.db);

        if reel_repo.find(param.user_id, param.movie_id).await?.is_some() {
            return Err(AppError::conflict("Movie already in your reel"));
        }

        reel_repo.create(param).await?;

        Ok(movie)
    }

    /// Sets or clears the rating of an entry.
    pub async fn update(&self, param: UpdateReelProgressParam) -> Result<ReelProgress, AppError> {
        param.validate()?;

        ReelProgressRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_IN_REEL_MESSAGE))
    }

    pub async fn remove(&self, user_id: i32, movie_id: i32) -> Result<(), AppError> {
        if !ReelProgressRepository::new(self.db)
            .delete(user_id, movie_id)
            .await?
        {
            return Err(AppError::not_found(NOT_IN_REEL_MESSAGE));
        }

        Ok(())
    }

    /// Groups every watch record by user, joined with the movie's title and year.
    ///
    /// Records whose movie no longer exists are left out, and users without any
    /// remaining records do not appear. Groups are ordered by user id.
    pub async fn admin_all(&self) -> Result<Vec<UserReelProgress>, AppError> {
        let entries = ReelProgressRepository::new(self.db).get_all().await?;

        let mut movie_ids: Vec<i32> = entries.iter().map(|e| e.movie_id).collect();
        movie_ids.sort_unstable();
        movie_ids.dedup();

        let movies: HashMap<i32, Movie> = MovieRepository::new(self.db)
            .find_by_ids(&movie_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut user_ids: Vec<i32> = entries.iter().map(|e| e.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let users = UserRepository::new(self.db).find_by_ids(&user_ids).await?;

        let mut grouped: HashMap<i32, Vec<AdminReelEntry>> = HashMap::new();
        for entry in entries {
            let Some(movie) = movies.get(&entry.movie_id) else {
                continue;
            };

            grouped.entry(entry.user_id).or_default().push(AdminReelEntry {
                movie_id: entry.movie_id,
                title: movie.title.clone(),
                year: movie.year.clone(),
                rating: entry.rating,
                is_watched: entry.is_watched,
            });
        }

        let mut result: Vec<UserReelProgress> = users
            .into_iter()
            .filter_map(|user| {
                grouped.remove(&user.id).map(|entries| UserReelProgress {
                    user_id: user.id,
                    username: user.username,
                    entries,
                })
            })
            .collect();
        result.sort_by_key(|group| group.user_id);

        Ok(result)
    }

    /// Removes any user's entry on an admin's behalf.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed
    /// - `Err(AppError::NotFound)` - No such user, or the user has no entry for the movie
    pub async fn admin_remove(&self, user_id: i32, movie_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(format!(
                "User not found with id: {}",
                user_id
            )));
        }

        if !ReelProgressRepository::new(self.db)
            .delete(user_id, movie_id)
            .await?
        {
            return Err(AppError::not_found(format!(
                "User has no Reel Progress record for movie with id: {}",
                movie_id
            )));
        }

        Ok(())
    }
}
