use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MovieDto {
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

/// Movie submitted by a user. Canon status and ownership are assigned by the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateMovieDto {
    pub title: String,
    pub year: String,
    pub director: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    pub imdb_id: String,
    pub poster: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdatePosterDto {
    pub poster: String,
}
