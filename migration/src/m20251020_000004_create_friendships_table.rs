use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friendships::Table)
                    .if_not_exists()
                    .col(pk_auto(Friendships::Id))
                    .col(integer(Friendships::User1))
                    .col(integer(Friendships::User2))
                    .col(integer(Friendships::RequesterUserId))
                    .col(boolean(Friendships::FriendRequestAccepted).default(false))
                    .col(timestamp_with_time_zone(Friendships::CreatedAt))
                    .col(timestamp_with_time_zone(Friendships::UpdatedAt))
                    .check(Expr::col(Friendships::User1).lt(Expr::col(Friendships::User2)))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_friendships_pair")
                    .table(Friendships::Table)
                    .col(Friendships::User1)
                    .col(Friendships::User2)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friendships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friendships {
    Table,
    Id,
    User1,
    User2,
    RequesterUserId,
    FriendRequestAccepted,
    CreatedAt,
    UpdatedAt,
}
