//! Movie data repository for database operations.

use crate::server::model::movie::{CreateMovieParam, Movie};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::json;

/// Repository providing database operations for movies.
pub struct MovieRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every Reel Canon movie ordered by id.
    pub async fn get_reel_canon(&self) -> Result<Vec<Movie>, DbErr> {
        let entities = entity::prelude::Movie::find()
            .filter(entity::movie::Column::IsReelCanon.eq(true))
            .order_by_asc(entity::movie::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Movie::from_entity).collect())
    }

    /// Gets every movie whose title matches exactly.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Movie>, DbErr> {
        let entities = entity::prelude::Movie::find()
            .filter(entity::movie::Column::Title.eq(title))
            .order_by_asc(entity::movie::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Movie::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DbErr> {
        let entity = entity::prelude::Movie::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Movie::from_entity))
    }

    pub async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, DbErr> {
        let entity = entity::prelude::Movie::find()
            .filter(entity::movie::Column::ImdbId.eq(imdb_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Movie::from_entity))
    }

    /// Gets the movies with the given ids. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Movie>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Movie::find()
            .filter(entity::movie::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Movie::from_entity).collect())
    }

    /// Inserts a user submitted movie. It is never part of the Reel Canon.
    ///
    /// # Returns
    /// - `Ok(Movie)` - The created movie
    /// - `Err(DbErr)` - Database error, including a duplicate IMDb id
    pub async fn create(&self, param: CreateMovieParam) -> Result<Movie, DbErr> {
        let now = Utc::now();
        let entity = entity::movie::ActiveModel {
            title: ActiveValue::Set(param.title),
            year: ActiveValue::Set(param.year),
            director: ActiveValue::Set(param.director),
            genre: ActiveValue::Set(json!(param.genre)),
            plot: ActiveValue::Set(param.plot),
            actors: ActiveValue::Set(json!(param.actors)),
            imdb_id: ActiveValue::Set(param.imdb_id),
            poster: ActiveValue::Set(param.poster),
            is_reel_canon: ActiveValue::Set(false),
            created_by: ActiveValue::Set(Some(param.created_by)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Movie::from_entity(entity))
    }

    /// Replaces a movie's poster URL.
    ///
    /// # Returns
    /// - `Ok(Some(Movie))` - The updated movie
    /// - `Ok(None)` - No movie with that IMDb id
    pub async fn update_poster(&self, imdb_id: &str, poster: String) -> Result<Option<Movie>, DbErr> {
        let Some(movie) = entity::prelude::Movie::find()
            .filter(entity::movie::Column::ImdbId.eq(imdb_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::movie::ActiveModel = movie.into();
        active_model.poster = ActiveValue::Set(poster);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Movie::from_entity(entity)))
    }

    /// Deletes a movie by IMDb id unless it belongs to the Reel Canon.
    ///
    /// Canon rows are excluded by the delete statement itself, so no caller can
    /// remove them through this repository.
    ///
    /// # Returns
    /// - `Ok(true)` - The movie was deleted
    /// - `Ok(false)` - No deletable movie with that IMDb id
    pub async fn delete_non_canon(&self, imdb_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Movie::delete_many()
            .filter(entity::movie::Column::ImdbId.eq(imdb_id))
            .filter(entity::movie::Column::IsReelCanon.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
