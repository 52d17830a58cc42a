use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables (and any composite indexes the entities cannot express), then
/// call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Movie};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Movie)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements, executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Single-column unique constraints declared on the entity are part
    /// of the generated statement.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index statement to run after table creation.
    ///
    /// # Arguments
    /// - `index` - Index definition, usually built with `Index::create()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the reel progress table along with its (user, movie) unique index.
    pub fn with_reel_progress_table(self) -> Self {
        self.with_table(ReelProgress).with_index(
            Index::create()
                .name("idx_reel_progress_user_movie")
                .table(ReelProgress)
                .col(entity::reel_progress::Column::UserId)
                .col(entity::reel_progress::Column::MovieId)
                .unique()
                .to_owned(),
        )
    }

    /// Adds the friendship table along with its (user1, user2) unique index.
    pub fn with_friendship_table(self) -> Self {
        self.with_table(Friendship).with_index(
            Index::create()
                .name("idx_friendships_pair")
                .table(Friendship)
                .col(entity::friendship::Column::User1)
                .col(entity::friendship::Column::User2)
                .unique()
                .to_owned(),
        )
    }

    /// Adds every application table and the composite indexes the migrations create.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_app_tables().build().await?;
    /// ```
    pub fn with_app_tables(self) -> Self {
        self.with_table(User)
            .with_table(Movie)
            .with_reel_progress_table()
            .with_friendship_table()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_schema(self.tables, self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
