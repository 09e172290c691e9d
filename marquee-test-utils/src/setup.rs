use std::sync::atomic::{AtomicU32, Ordering};

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::{
    constant::{RESERVATION_UNIQUE_INDEX, TEST_JWT_SECRET},
    error::TestError,
};

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

static SHARED_DATABASE_SEQUENCE: AtomicU32 = AtomicU32::new(0);

pub struct TestSetup {
    pub state: TestAppState,
    sequence: AtomicU32,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.state.db.clone(), self.state.jwt_secret.clone()))
    }
}

impl TestSetup {
    /// Opens a fresh in-memory database on a single connection
    pub async fn new() -> Result<Self, TestError> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        Self::connect(opt).await
    }

    /// Opens a fresh in-memory database shared by a pool of `connections` connections
    ///
    /// Transactions on different connections contend for the same tables, SQLite reports the
    /// contention as busy or locked errors.
    pub async fn with_pool(connections: u32) -> Result<Self, TestError> {
        let n = SHARED_DATABASE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let url = format!(
            "sqlite:file:marquee_test_{}_{}?mode=memory&cache=shared",
            std::process::id(),
            n
        );

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(connections)
            .min_connections(1)
            .sqlx_logging(false);

        Self::connect(opt).await
    }

    async fn connect(opt: ConnectOptions) -> Result<Self, TestError> {
        let db = Database::connect(opt).await?;

        Ok(TestSetup {
            state: TestAppState {
                db,
                jwt_secret: TEST_JWT_SECRET.to_string(),
            },
            sequence: AtomicU32::new(0),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Next value of a per-test counter, used to give fixtures unique names
    pub fn next_sequence(&self) -> u32 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Every table of the schema, in foreign key order
    pub fn catalog_tables() -> Vec<TableCreateStatement> {
        let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

        vec![
            schema.create_table_from_entity(entity::prelude::MarqueeUser),
            schema.create_table_from_entity(entity::prelude::Movie),
            schema.create_table_from_entity(entity::prelude::Hall),
            schema.create_table_from_entity(entity::prelude::Showtime),
            schema.create_table_from_entity(entity::prelude::Reservation),
        ]
    }

    /// Indexes the migrations create that entities cannot express
    pub fn catalog_indexes() -> Vec<IndexCreateStatement> {
        vec![Index::create()
            .name(RESERVATION_UNIQUE_INDEX)
            .table(entity::prelude::Reservation)
            .col(entity::reservation::Column::ShowtimeId)
            .col(entity::reservation::Column::UserId)
            .unique()
            .to_owned()]
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    // Pattern 1: Single connection
    () => {{
        async {
            let setup = TestSetup::new().await?;

            setup.with_tables(TestSetup::catalog_tables()).await?;
            setup.with_indexes(TestSetup::catalog_indexes()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Pool of connections sharing one database
    (pool: $connections:expr) => {{
        async {
            let setup = TestSetup::with_pool($connections).await?;

            setup.with_tables(TestSetup::catalog_tables()).await?;
            setup.with_indexes(TestSetup::catalog_indexes()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
