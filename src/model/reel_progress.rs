use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Field names accepted in reel progress request bodies.
pub const REEL_PROGRESS_FIELDS: [&str; 3] = ["movie", "rating", "is_watched"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReelProgressDto {
    /// Movie id
    pub movie: i32,
    pub rating: Option<i32>,
    pub is_watched: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AddReelProgressDto {
    pub movie: i32,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub is_watched: Option<bool>,
}

/// Update body. `rating` distinguishes an absent key (`None`) from an explicit
/// null (`Some(None)`), which clears the rating.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateReelProgressDto {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub rating: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_watched: Option<bool>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AddedReelProgressDto {
    pub message: String,
    pub added_movie_id: i32,
}

/// One watch record joined with its movie, as listed for admins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminReelEntryDto {
    pub movie_id: i32,
    pub title: String,
    pub year: String,
    pub rating: Option<i32>,
    pub is_watched: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserReelProgressDto {
    pub user_id: i32,
    pub username: String,
    pub reel_progress: Vec<AdminReelEntryDto>,
}
