//! Leaderboard domain models.

use chrono::{DateTime, Utc};

use crate::model::leaderboard::{LeaderboardDto, LeaderboardEntryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: i32,
    pub username: String,
    pub reel_progress_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub updated_at: DateTime<Utc>,
}

impl Leaderboard {
    pub fn message(&self) -> String {
        if self.entries.is_empty() {
            "Leaderboard is empty - no users with reel progress yet".to_string()
        } else {
            format!("Found {} users with Reel Progress", self.entries.len())
        }
    }

    pub fn into_dto(self) -> LeaderboardDto {
        LeaderboardDto {
            message: self.message(),
            entries: self
                .entries
                .into_iter()
                .map(|e| LeaderboardEntryDto {
                    user_id: e.user_id,
                    username: e.username,
                    reel_progress_count: e.reel_progress_count,
                })
                .collect(),
            updated_at: self.updated_at,
        }
    }
}
