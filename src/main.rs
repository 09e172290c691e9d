use marquee::server::{config::Config, error::Error, model::app::AppState, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap_admin(&db, &config).await?;

    let app = startup::build_app(AppState::new(db, &config), config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
