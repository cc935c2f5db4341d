use crate::{
    abstract_trait::{
        DynInventoryQueryRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        DynUserQueryRepository, OrderServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderLineResponse, OrderResponse, PartyResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::NewOrderLine,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    inventory_query: DynInventoryQueryRepository,
    user_query: DynUserQueryRepository,
}

impl OrderService {
    pub fn new(
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
        inventory_query: DynInventoryQueryRepository,
        user_query: DynUserQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            inventory_query,
            user_query,
        }
    }

    fn invalid_items() -> ServiceError {
        ServiceError::Validation(vec!["Invalid items in order".to_string()])
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn create_order(
        &self,
        retailer_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🛒 Creating order: retailer_id={retailer_id} supplier_id={} ({} lines)",
            req.supplier_id,
            req.items.len()
        );

        let mut requested_ids: Vec<i32> = req.items.iter().map(|line| line.product).collect();
        requested_ids.sort_unstable();
        requested_ids.dedup();

        let found = self
            .inventory_query
            .find_items_for_order(&requested_ids, req.supplier_id)
            .await?;

        // Every distinct requested item must exist AND belong to the chosen
        // supplier, or the whole order is rejected.
        if found.len() != requested_ids.len() {
            error!(
                "❌ Order rejected: {} of {} requested items are not sold by supplier {}",
                requested_ids.len() - found.len(),
                requested_ids.len(),
                req.supplier_id
            );
            return Err(Self::invalid_items());
        }

        let items_by_id: HashMap<i32, _> =
            found.into_iter().map(|item| (item.item_id, item)).collect();

        let mut total_amount: i64 = 0;
        let mut lines = Vec::with_capacity(req.items.len());
        for line in &req.items {
            let item = items_by_id
                .get(&line.product)
                .ok_or_else(Self::invalid_items)?;
            // Price is snapshotted from the inventory item at order time.
            total_amount += item.price * i64::from(line.quantity);
            lines.push(NewOrderLine {
                product_id: item.item_id,
                quantity: line.quantity,
                price: item.price,
            });
        }

        let (order, order_items) = self
            .command
            .create_order(
                retailer_id,
                req.supplier_id,
                &req.shipping_address,
                total_amount,
                &lines,
            )
            .await?;

        let line_responses = order_items
            .iter()
            .map(|item| {
                OrderLineResponse::from_item(
                    item,
                    items_by_id.get(&item.product_id).map(|i| i.name.clone()),
                )
            })
            .collect();

        Ok(ApiResponse::success(
            "Order created successfully",
            OrderResponse::from_created(order, line_responses),
        ))
    }

    async fn update_status(
        &self,
        supplier_id: i32,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🔄 Supplier {supplier_id} setting order {order_id} status to {:?}",
            req.status
        );

        // The repository applies the write only to an order this supplier
        // owns, so a miss covers both "no such order" and "not yours".
        let order = self
            .command
            .update_status(order_id, supplier_id, req.status)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let retailer = self.user_query.find_by_id(order.retailer_id).await?;
        let items = self.query.find_items_for_orders(&[order.order_id]).await?;
        let line_responses = items.into_iter().map(OrderLineResponse::from).collect();

        let mut response = OrderResponse::from_created(order, line_responses);
        response.retailer = retailer.map(PartyResponse::from);

        Ok(ApiResponse::success(
            "Order status updated successfully",
            response,
        ))
    }

    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("🔍 Fetching orders for supplier_id={supplier_id}");

        let orders = self.query.find_by_supplier(supplier_id).await?;
        let order_ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
        let mut items_by_order = self.lines_by_order(&order_ids).await?;

        let data = orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.order_id).unwrap_or_default();
                OrderResponse::from_supplier_view(order, items)
            })
            .collect();

        Ok(ApiResponse::success("Orders retrieved successfully", data))
    }

    async fn find_by_retailer(
        &self,
        retailer_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("🔍 Fetching orders for retailer_id={retailer_id}");

        let orders = self.query.find_by_retailer(retailer_id).await?;
        let order_ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
        let mut items_by_order = self.lines_by_order(&order_ids).await?;

        let data = orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.order_id).unwrap_or_default();
                OrderResponse::from_retailer_view(order, items)
            })
            .collect();

        Ok(ApiResponse::success("Orders retrieved successfully", data))
    }
}

impl OrderService {
    async fn lines_by_order(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<OrderLineResponse>>, ServiceError> {
        let mut grouped: HashMap<i32, Vec<OrderLineResponse>> = HashMap::new();
        for item in self.query.find_items_for_orders(order_ids).await? {
            grouped
                .entry(item.order_id)
                .or_default()
                .push(OrderLineResponse::from(item));
        }
        Ok(grouped)
    }
}
