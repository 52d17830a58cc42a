use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reel_progress::ReelProgressRepository, user::UserRepository},
    error::AppError,
    model::leaderboard::{Leaderboard, LeaderboardEntry},
};

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ranks users with at least one reel progress entry by entry count.
    ///
    /// Ties are broken by username, ascending. Counts left behind by deleted
    /// users are skipped.
    pub async fn get(&self) -> Result<Leaderboard, AppError> {
        let counts = ReelProgressRepository::new(self.db).count_by_user().await?;

        let user_ids: Vec<i32> = counts.iter().map(|(user_id, _)| *user_id).collect();
        let usernames: HashMap<i32, String> = UserRepository::new(self.db)
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        let mut entries: Vec<LeaderboardEntry> = counts
            .into_iter()
            .filter_map(|(user_id, count)| {
                usernames.get(&user_id).map(|username| LeaderboardEntry {
                    user_id,
                    username: username.clone(),
                    reel_progress_count: count.max(0) as u64,
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.reel_progress_count
                .cmp(&a.reel_progress_count)
                .then_with(|| a.username.cmp(&b.username))
        });

        Ok(Leaderboard {
            entries,
            updated_at: Utc::now(),
        })
    }
}
