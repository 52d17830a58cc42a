//! Reel progress domain models and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::model::reel_progress::{AdminReelEntryDto, ReelProgressDto, UserReelProgressDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ReelProgress {
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: Option<i32>,
    pub is_watched: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReelProgress {
    pub fn into_dto(self) -> ReelProgressDto {
        ReelProgressDto {
            movie: self.movie_id,
            rating: self.rating,
            is_watched: self.is_watched,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::reel_progress::Model) -> Self {
        Self {
            user_id: entity.user_id,
            movie_id: entity.movie_id,
            rating: entity.rating,
            is_watched: entity.is_watched,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct AddReelProgressParam {
    pub user_id: i32,
    pub movie_id: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub is_watched: bool,
}

/// Update for an existing entry. `rating: None` clears the rating.
#[derive(Debug, Clone, Validate)]
pub struct UpdateReelProgressParam {
    pub user_id: i32,
    pub movie_id: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub is_watched: Option<bool>,
}

/// A watch record joined with the title and year of its movie.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminReelEntry {
    pub movie_id: i32,
    pub title: String,
    pub year: String,
    pub rating: Option<i32>,
    pub is_watched: bool,
}

/// All resolvable watch records of one user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReelProgress {
    pub user_id: i32,
    pub username: String,
    pub entries: Vec<AdminReelEntry>,
}

impl UserReelProgress {
    pub fn into_dto(self) -> UserReelProgressDto {
        UserReelProgressDto {
            user_id: self.user_id,
            username: self.username,
            reel_progress: self
                .entries
                .into_iter()
                .map(|e| AdminReelEntryDto {
                    movie_id: e.movie_id,
                    title: e.title,
                    year: e.year,
                    rating: e.rating,
                    is_watched: e.is_watched,
                })
                .collect(),
        }
    }
}
