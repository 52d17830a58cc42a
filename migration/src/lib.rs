pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_users_table;
mod m20251020_000002_create_movies_table;
mod m20251020_000003_create_reel_progress_table;
mod m20251020_000004_create_friendships_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_users_table::Migration),
            Box::new(m20251020_000002_create_movies_table::Migration),
            Box::new(m20251020_000003_create_reel_progress_table::Migration),
            Box::new(m20251020_000004_create_friendships_table::Migration),
        ]
    }
}
