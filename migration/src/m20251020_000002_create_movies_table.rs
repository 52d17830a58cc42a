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
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string_len(Movies::Title, 200))
                    .col(string_len(Movies::Year, 4))
                    .col(string(Movies::Director))
                    .col(json(Movies::Genre))
                    .col(string_len_null(Movies::Plot, 1000))
                    .col(json(Movies::Actors))
                    .col(string_uniq(Movies::ImdbId))
                    .col(string(Movies::Poster))
                    .col(boolean(Movies::IsReelCanon).default(false))
                    .col(integer_null(Movies::CreatedBy))
                    .col(timestamp_with_time_zone(Movies::CreatedAt))
                    .col(timestamp_with_time_zone(Movies::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_created_by")
                            .from(Movies::Table, Movies::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_is_reel_canon")
                    .table(Movies::Table)
                    .col(Movies::IsReelCanon)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movies {
    Table,
    Id,
    Title,
    Year,
    Director,
    Genre,
    Plot,
    Actors,
    ImdbId,
    Poster,
    IsReelCanon,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
