use league_api::{config::Config, db, error::StartupError, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting league api server...");

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    match config.database_url.as_deref() {
        Some(url) => {
            db::migrate(url).await?;
            tracing::info!("Database schema is up to date.");
        }
        None => tracing::warn!("DATABASE_URL is not set, league requests will fail until it is configured."),
    }

    let addr = config.addr();
    let app = league_api::app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
