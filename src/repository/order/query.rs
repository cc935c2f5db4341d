use crate::{
    abstract_trait::OrderQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::{OrderItemDetail, OrderWithParty},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<OrderWithParty>, RepositoryError> {
        info!("🔍 Fetching orders for supplier_id={supplier_id}");

        let orders = sqlx::query_as::<_, OrderWithParty>(
            r#"
            SELECT o.order_id, o.retailer_id, o.supplier_id, o.status,
                   o.total_amount, o.shipping_address, o.created_at, o.updated_at,
                   u.user_id AS party_id, u.name AS party_name, u.email AS party_email
            FROM orders o
            JOIN users u ON u.user_id = o.retailer_id
            WHERE o.supplier_id = $1
            ORDER BY o.created_at DESC
            "#,
        )
        .bind(supplier_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch supplier orders: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_by_retailer(
        &self,
        retailer_id: i32,
    ) -> Result<Vec<OrderWithParty>, RepositoryError> {
        info!("🔍 Fetching orders for retailer_id={retailer_id}");

        let orders = sqlx::query_as::<_, OrderWithParty>(
            r#"
            SELECT o.order_id, o.retailer_id, o.supplier_id, o.status,
                   o.total_amount, o.shipping_address, o.created_at, o.updated_at,
                   u.user_id AS party_id, u.name AS party_name, u.email AS party_email
            FROM orders o
            JOIN users u ON u.user_id = o.supplier_id
            WHERE o.retailer_id = $1
            ORDER BY o.created_at DESC
            "#,
        )
        .bind(retailer_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch retailer orders: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let items = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT oi.order_item_id, oi.order_id, oi.product_id,
                   i.name AS product_name, oi.quantity, oi.price
            FROM order_items oi
            JOIN inventory_items i ON i.item_id = oi.product_id
            WHERE oi.order_id = ANY($1)
            ORDER BY oi.order_item_id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order lines: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
