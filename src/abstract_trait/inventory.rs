use crate::{
    domain::{
        requests::CreateInventoryItemRequest,
        responses::{ApiResponse, InventoryItemResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::InventoryItem,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInventoryQueryRepository = Arc<dyn InventoryQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InventoryQueryRepositoryTrait {
    async fn find_by_supplier(&self, supplier_id: i32)
    -> Result<Vec<InventoryItem>, RepositoryError>;

    /// Fetches the requested items scoped to one supplier. Existence and
    /// ownership are validated by the same query.
    async fn find_items_for_order(
        &self,
        product_ids: &[i32],
        supplier_id: i32,
    ) -> Result<Vec<InventoryItem>, RepositoryError>;
}

pub type DynInventoryCommandRepository = Arc<dyn InventoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InventoryCommandRepositoryTrait {
    async fn create_item(
        &self,
        supplier_id: i32,
        req: &CreateInventoryItemRequest,
    ) -> Result<InventoryItem, RepositoryError>;
}

pub type DynInventoryService = Arc<dyn InventoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait InventoryServiceTrait {
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<ApiResponse<Vec<InventoryItemResponse>>, ServiceError>;

    async fn create_item(
        &self,
        supplier_id: i32,
        req: &CreateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItemResponse>, ServiceError>;
}
