use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReelProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(ReelProgress::Id))
                    .col(integer(ReelProgress::UserId))
                    // No foreign key: entries outlive a removed movie
                    .col(integer(ReelProgress::MovieId))
                    .col(integer_null(ReelProgress::Rating))
                    .col(boolean(ReelProgress::IsWatched).default(false))
                    .col(timestamp_with_time_zone(ReelProgress::CreatedAt))
                    .col(timestamp_with_time_zone(ReelProgress::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reel_progress_user_id")
                            .from(ReelProgress::Table, ReelProgress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reel_progress_user_movie")
                    .table(ReelProgress::Table)
                    .col(ReelProgress::UserId)
                    .col(ReelProgress::MovieId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReelProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReelProgress {
    Table,
    Id,
    UserId,
    MovieId,
    Rating,
    IsWatched,
    CreatedAt,
    UpdatedAt,
}
