use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fyyur::config::AppConfig;
use fyyur::state::AppState;
use fyyur::{build_router, database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    info!(url = %config.database.url, "Database ready");

    if config.database.seed_sample_data {
        seed::seed_sample_data(&db)
            .await
            .context("Failed to seed sample data")?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState { db, config });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
