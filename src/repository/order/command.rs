use crate::{
    abstract_trait::OrderCommandRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::{NewOrderLine, Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        retailer_id: i32,
        supplier_id: i32,
        shipping_address: &str,
        total_amount: i64,
        lines: &[NewOrderLine],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders
                (retailer_id, supplier_id, total_amount, shipping_address,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING order_id, retailer_id, supplier_id, status,
                      total_amount, shipping_address, created_at, updated_at
            "#,
        )
        .bind(retailer_id)
        .bind(supplier_id)
        .bind(total_amount)
        .bind(shipping_address)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert order for retailer {retailer_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let item = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                RETURNING order_item_id, order_id, product_id, quantity, price
                "#,
            )
            .bind(order.order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to insert order line (product {}): {err:?}",
                    line.product_id
                );
                RepositoryError::from(err)
            })?;
            items.push(item);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} ({} lines, total {})",
            order.order_id,
            items.len(),
            order.total_amount
        );
        Ok((order, items))
    }

    async fn update_status(
        &self,
        order_id: i32,
        supplier_id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        // Ownership and existence checked by the same statement, so a
        // supplier can never touch another supplier's order and there is no
        // read-then-write window.
        let result = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $3,
                updated_at = current_timestamp
            WHERE order_id = $1 AND supplier_id = $2
            RETURNING order_id, retailer_id, supplier_id, status,
                      total_amount, shipping_address, created_at, updated_at
            "#,
        )
        .bind(order_id)
        .bind(supplier_id)
        .bind(status)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {order_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if let Some(order) = &result {
            info!("🔄 Order {} status set to {:?}", order.order_id, order.status);
        }
        Ok(result)
    }
}
