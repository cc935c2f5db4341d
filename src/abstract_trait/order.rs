use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{NewOrderLine, Order, OrderItem, OrderItemDetail, OrderStatus, OrderWithParty},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Orders owned by the supplier, newest first, joined with the retailer.
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<OrderWithParty>, RepositoryError>;

    /// Orders placed by the retailer, newest first, joined with the supplier.
    async fn find_by_retailer(
        &self,
        retailer_id: i32,
    ) -> Result<Vec<OrderWithParty>, RepositoryError>;

    async fn find_items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemDetail>, RepositoryError>;
}

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order and all of its lines in one transaction.
    async fn create_order(
        &self,
        retailer_id: i32,
        supplier_id: i32,
        shipping_address: &str,
        total_amount: i64,
        lines: &[NewOrderLine],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;

    /// Atomic conditional write: applies only when the order exists AND is
    /// owned by `supplier_id`. `None` means no such owned order.
    async fn update_status(
        &self,
        order_id: i32,
        supplier_id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError>;
}

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn create_order(
        &self,
        retailer_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn update_status(
        &self,
        supplier_id: i32,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;

    async fn find_by_retailer(
        &self,
        retailer_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}
