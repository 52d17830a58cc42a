use crate::server::{error::AppError, service::leaderboard::LeaderboardService};
use test_utils::{builder::TestBuilder, factory};
