use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LeaderboardEntryDto {
    pub user_id: i32,
    pub username: String,
    pub reel_progress_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LeaderboardDto {
    pub message: String,
    pub entries: Vec<LeaderboardEntryDto>,
    pub updated_at: DateTime<Utc>,
}
