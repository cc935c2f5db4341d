//! Resets the database to a small demo dataset: one supplier with two
//! inventory items and one retailer, both with the password `123456`.

use anyhow::{Context, Result};
use dotenv::dotenv;
use supplysync::{
    abstract_trait::{
        HashingTrait, InventoryCommandRepositoryTrait, UserCommandRepositoryTrait,
    },
    config::{Config, ConnectionManager, Hashing},
    domain::requests::{CreateInventoryItemRequest, RegisterRequest},
    model::UserRole,
    repository::{InventoryCommandRepository, UserCommandRepository},
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

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    info!("🧹 Clearing existing data");
    sqlx::query("DELETE FROM order_items").execute(&pool).await?;
    sqlx::query("DELETE FROM orders").execute(&pool).await?;
    sqlx::query("DELETE FROM inventory_items").execute(&pool).await?;
    sqlx::query("DELETE FROM users").execute(&pool).await?;

    let hashing = Hashing::new();
    let hashed_password = hashing
        .hash_password("123456")
        .await
        .map_err(|err| anyhow::anyhow!("Failed to hash seed password: {err}"))?;

    let users = UserCommandRepository::new(pool.clone());
    let items = InventoryCommandRepository::new(pool);

    let supplier = users
        .create_user(
            &RegisterRequest {
                name: "Test Supplier".into(),
                email: "supplier@test.com".into(),
                password: "123456".into(),
                role: UserRole::Supplier,
            },
            &hashed_password,
        )
        .await?;
    info!("✅ Created supplier ID {}", supplier.user_id);

    let retailer = users
        .create_user(
            &RegisterRequest {
                name: "Test Retailer".into(),
                email: "retailer@test.com".into(),
                password: "123456".into(),
                role: UserRole::Retailer,
            },
            &hashed_password,
        )
        .await?;
    info!("✅ Created retailer ID {}", retailer.user_id);

    items
        .create_item(
            supplier.user_id,
            &CreateInventoryItemRequest {
                name: "Premium Widget".into(),
                description: "High quality widget for retail".into(),
                category: "Widgets".into(),
                price: 2999,
                quantity: 100,
            },
        )
        .await?;

    items
        .create_item(
            supplier.user_id,
            &CreateInventoryItemRequest {
                name: "Basic Gadget".into(),
                description: "Entry level gadget".into(),
                category: "Gadgets".into(),
                price: 1250,
                quantity: 250,
            },
        )
        .await?;

    info!("🌱 Seed data created: supplier@test.com / retailer@test.com (password 123456)");
    Ok(())
}
