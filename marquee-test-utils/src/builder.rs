//! Declarative test builder.
//!
//! Tables and fixtures are queued on the builder and created in dependency order by `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    users: Vec<String>,
    admins: Vec<String>,
    movies: Vec<String>,
    halls: Vec<(String, i32)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create every table of the schema, plus the reservation uniqueness index.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use marquee_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), marquee_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(MarqueeUser)
    ///     .with_user("alice")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the `user` role.
    pub fn with_user(mut self, name: &str) -> Self {
        self.users.push(name.to_string());
        self
    }

    /// Insert a user with the `admin` role.
    pub fn with_admin(mut self, name: &str) -> Self {
        self.admins.push(name.to_string());
        self
    }

    pub fn with_movie(mut self, title: &str) -> Self {
        self.movies.push(title.to_string());
        self
    }

    pub fn with_hall(mut self, name: &str, seat_count: i32) -> Self {
        self.halls.push((name.to_string(), seat_count));
        self
    }

    /// Create the configured tables and insert fixtures.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Ready to use test environment
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();
        if self.include_catalog_tables {
            all_tables.extend(TestSetup::catalog_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_catalog_tables {
            setup.with_indexes(TestSetup::catalog_indexes()).await?;
        }

        for name in &self.users {
            setup.user().insert_user(name).await?;
        }
        for name in &self.admins {
            setup.user().insert_admin(name).await?;
        }
        for title in &self.movies {
            setup.catalog().insert_movie(title).await?;
        }
        for (name, seat_count) in &self.halls {
            setup.catalog().insert_hall(name, *seat_count).await?;
        }

        Ok(setup)
    }
}
