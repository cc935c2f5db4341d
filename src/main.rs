use anyhow::{Context, Result};
use dotenv::dotenv;
use std::sync::Arc;
use supplysync::{
    config::{Config, ConnectionManager, Hashing, JwtConfig},
    di::DependenciesInject,
    handler::AppRouter,
    state::AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    if config.run_migrations {
        info!("🗄️ Running database migrations");
        sqlx::migrate!()
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret));
    let hashing = Arc::new(Hashing::new());
    let di_container = DependenciesInject::new(pool, hashing, jwt_config.clone());
    let state = AppState::new(jwt_config, di_container);

    AppRouter::serve(config.port, &config.cors_origin, state).await
}
