use crate::{
    abstract_trait::InventoryCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateInventoryItemRequest, errors::RepositoryError, model::InventoryItem,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct InventoryCommandRepository {
    db: ConnectionPool,
}

impl InventoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryCommandRepositoryTrait for InventoryCommandRepository {
    async fn create_item(
        &self,
        supplier_id: i32,
        req: &CreateInventoryItemRequest,
    ) -> Result<InventoryItem, RepositoryError> {
        let result = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory_items
                (supplier_id, name, description, category, price, quantity,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp)
            RETURNING item_id, supplier_id, name, description, category,
                      price, quantity, created_at, updated_at
            "#,
        )
        .bind(supplier_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.category)
        .bind(req.price)
        .bind(req.quantity)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create inventory item for supplier {supplier_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created inventory item ID {} for supplier {supplier_id}",
            result.item_id
        );
        Ok(result)
    }
}
