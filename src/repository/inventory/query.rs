use crate::{
    abstract_trait::InventoryQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::InventoryItem,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct InventoryQueryRepository {
    db: ConnectionPool,
}

impl InventoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryQueryRepositoryTrait for InventoryQueryRepository {
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<InventoryItem>, RepositoryError> {
        info!("🔍 Fetching inventory for supplier_id={supplier_id}");

        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT item_id, supplier_id, name, description, category,
                   price, quantity, created_at, updated_at
            FROM inventory_items
            WHERE supplier_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(supplier_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch inventory for supplier {supplier_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }

    async fn find_items_for_order(
        &self,
        product_ids: &[i32],
        supplier_id: i32,
    ) -> Result<Vec<InventoryItem>, RepositoryError> {
        // Ownership check happens in the same query: items belonging to a
        // different supplier simply do not come back.
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT item_id, supplier_id, name, description, category,
                   price, quantity, created_at, updated_at
            FROM inventory_items
            WHERE item_id = ANY($1) AND supplier_id = $2
            "#,
        )
        .bind(product_ids)
        .bind(supplier_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items for supplier {supplier_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
