//! Reel progress data repository for database operations.

use crate::server::model::reel_progress::{
    AddReelProgressParam, ReelProgress, UpdateReelProgressParam,
};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for users' reel progress.
pub struct ReelProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReelProgressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's entries in the order they were added.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<ReelProgress>, DbErr> {
        let entities = entity::prelude::ReelProgress::find()
            .filter(entity::reel_progress::Column::UserId.eq(user_id))
            .order_by_asc(entity::reel_progress::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ReelProgress::from_entity).collect())
    }

    /// Gets every entry ordered by user, then by insertion.
    pub async fn get_all(&self) -> Result<Vec<ReelProgress>, DbErr> {
        let entities = entity::prelude::ReelProgress::find()
            .order_by_asc(entity::reel_progress::Column::UserId)
            .order_by_asc(entity::reel_progress::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ReelProgress::from_entity).collect())
    }

    pub async fn find(&self, user_id: i32, movie_id: i32) -> Result<Option<ReelProgress>, DbErr> {
        Ok(self
            .find_entity(user_id, movie_id)
            .await?
            .map(ReelProgress::from_entity))
    }

    /// Inserts an entry.
    ///
    /// # Returns
    /// - `Ok(ReelProgress)` - The created entry
    /// - `Err(DbErr)` - Database error, including a unique violation on (user, movie)
    pub async fn create(&self, param: AddReelProgressParam) -> Result<ReelProgress, DbErr> {
        let now = Utc::now();
        let entity = entity::reel_progress::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            movie_id: ActiveValue::Set(param.movie_id),
            rating: ActiveValue::Set(param.rating),
            is_watched: ActiveValue::Set(param.is_watched),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ReelProgress::from_entity(entity))
    }

    /// Sets the rating (and optionally the watched flag) of an existing entry.
    ///
    /// # Returns
    /// - `Ok(Some(ReelProgress))` - The updated entry
    /// - `Ok(None)` - The user has no entry for that movie
    pub async fn update(
        &self,
        param: UpdateReelProgressParam,
    ) -> Result<Option<ReelProgress>, DbErr> {
        let Some(entry) = self.find_entity(param.user_id, param.movie_id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::reel_progress::ActiveModel = entry.into();
        active_model.rating = ActiveValue::Set(param.rating);
        if let Some(is_watched) = param.is_watched {
            active_model.is_watched = ActiveValue::Set(is_watched);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(ReelProgress::from_entity(entity)))
    }

    /// Deletes a user's entry for a movie.
    ///
    /// # Returns
    /// - `Ok(true)` - The entry was deleted
    /// - `Ok(false)` - The user has no entry for that movie
    pub async fn delete(&self, user_id: i32, movie_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ReelProgress::delete_many()
            .filter(entity::reel_progress::Column::UserId.eq(user_id))
            .filter(entity::reel_progress::Column::MovieId.eq(movie_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts entries per user, for users with at least one entry.
    ///
    /// # Returns
    /// - `Ok(Vec<(user_id, count)>)` - One tuple per user, unordered
    pub async fn count_by_user(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::ReelProgress::find()
            .select_only()
            .column(entity::reel_progress::Column::UserId)
            .column_as(
                Func::count(Expr::col(entity::reel_progress::Column::Id)),
                "count",
            )
            .group_by(entity::reel_progress::Column::UserId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    async fn find_entity(
        &self,
        user_id: i32,
        movie_id: i32,
    ) -> Result<Option<entity::reel_progress::Model>, DbErr> {
        entity::prelude::ReelProgress::find()
            .filter(entity::reel_progress::Column::UserId.eq(user_id))
            .filter(entity::reel_progress::Column::MovieId.eq(movie_id))
            .one(self.db)
            .await
    }
}
