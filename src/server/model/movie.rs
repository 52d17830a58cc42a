//! Movie domain models and parameters.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde_json::Value;
use validator::{Validate, ValidationError as FieldError};

use crate::model::movie::{CreateMovieDto, MovieDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: String,
    pub director: String,
    pub genre: Vec<String>,
    pub plot: Option<String>,
    pub actors: Vec<String>,
    pub imdb_id: String,
    pub poster: String,
    pub is_reel_canon: bool,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    pub fn into_dto(self) -> MovieDto {
        MovieDto {
            id: self.id,
            title: self.title,
            year: self.year,
            director: self.director,
            genre: self.genre,
            plot: self.plot,
            actors: self.actors,
            imdb_id: self.imdb_id,
            poster: self.poster,
            is_reel_canon: self.is_reel_canon,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// `genre` and `actors` are JSON arrays; non-string elements are dropped.
    pub fn from_entity(entity: entity::movie::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            year: entity.year,
            director: entity.director,
            genre: string_list(&entity.genre),
            plot: entity.plot,
            actors: string_list(&entity.actors),
            imdb_id: entity.imdb_id,
            poster: entity.poster,
            is_reel_canon: entity.is_reel_canon,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// User submitted movie, trimmed and validated.
///
/// Always stored outside the Reel Canon and owned by `created_by`.
#[derive(Debug, Clone, Validate)]
pub struct CreateMovieParam {
    #[validate(length(min = 1, max = 200, message = "Movie title is required and must be at most 200 characters"))]
    pub title: String,
    #[validate(custom(function = "validate_year"))]
    pub year: String,
    #[validate(length(min = 1, message = "Director is required"))]
    pub director: String,
    #[validate(custom(function = "validate_list"))]
    pub genre: Vec<String>,
    #[validate(length(max = 1000, message = "Plot must be at most 1000 characters"))]
    pub plot: Option<String>,
    #[validate(custom(function = "validate_list"))]
    pub actors: Vec<String>,
    #[validate(custom(function = "validate_imdb_id"))]
    pub imdb_id: String,
    #[validate(url(message = "Poster must be a valid URL"))]
    pub poster: String,
    pub created_by: i32,
}

impl CreateMovieParam {
    pub fn from_dto(dto: CreateMovieDto, created_by: i32) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            year: dto.year.trim().to_string(),
            director: dto.director.trim().to_string(),
            genre: dto.genre.iter().map(|g| g.trim().to_string()).collect(),
            plot: dto.plot,
            actors: dto.actors.iter().map(|a| a.trim().to_string()).collect(),
            imdb_id: dto.imdb_id.trim().to_string(),
            poster: dto.poster.trim().to_string(),
            created_by,
        }
    }
}

/// Exactly four ASCII digits.
pub fn validate_year(year: &str) -> Result<(), FieldError> {
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(field_error("year", "Year must be exactly four digits"))
    }
}

/// `tt` followed by at least one digit.
pub fn validate_imdb_id(imdb_id: &str) -> Result<(), FieldError> {
    match imdb_id.strip_prefix("tt") {
        Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => Ok(()),
        _ => Err(field_error(
            "imdb_id",
            "IMDb id must be 'tt' followed by digits",
        )),
    }
}

/// Every entry must be non-empty after trimming.
pub fn validate_list(values: &[String]) -> Result<(), FieldError> {
    if values.iter().all(|v| !v.trim().is_empty()) {
        Ok(())
    } else {
        Err(field_error("list", "List entries cannot be empty"))
    }
}

fn field_error(code: &'static str, message: &'static str) -> FieldError {
    FieldError::new(code).with_message(Cow::Borrowed(message))
}
