use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::Error, model::app::AppState, router, service::user::UserService,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the administrator from `ADMIN_USERNAME`/`ADMIN_PASSWORD` if configured and missing
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let Some((username, password)) = &config.admin_credentials else {
        return Ok(());
    };

    if let Some(admin) = UserService::new(db).ensure_admin(username, password).await? {
        tracing::info!(user_id = admin.id, "Created administrator {:?}", admin.name);
    }

    Ok(())
}

/// Routes with state, request tracing and the request timeout applied
///
/// A request cut off by the timeout drops its future, which rolls back any open transaction.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    router::routes()
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
