use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use biblioteca_api::api::{router, AppState};
use biblioteca_api::config::AppConfig;
use biblioteca_api::infrastructure::database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biblioteca_api=debug,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = database::connect(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;

    database::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Database connected successfully");

    let app = router(AppState::postgres(pool, &config));

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Iniciando servidor en: http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
