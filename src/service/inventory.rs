use crate::{
    abstract_trait::{
        DynInventoryCommandRepository, DynInventoryQueryRepository, InventoryServiceTrait,
    },
    domain::{requests::CreateInventoryItemRequest, responses::{ApiResponse, InventoryItemResponse}},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct InventoryService {
    query: DynInventoryQueryRepository,
    command: DynInventoryCommandRepository,
}

impl InventoryService {
    pub fn new(query: DynInventoryQueryRepository, command: DynInventoryCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl InventoryServiceTrait for InventoryService {
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<ApiResponse<Vec<InventoryItemResponse>>, ServiceError> {
        info!("🔍 Fetching inventory for supplier_id={supplier_id}");

        let items = self.query.find_by_supplier(supplier_id).await.map_err(|err| {
            error!("❌ Failed to fetch inventory for supplier {supplier_id}: {err:?}");
            ServiceError::from(err)
        })?;

        let data: Vec<InventoryItemResponse> =
            items.into_iter().map(InventoryItemResponse::from).collect();

        Ok(ApiResponse::success(
            "Inventory retrieved successfully",
            data,
        ))
    }

    async fn create_item(
        &self,
        supplier_id: i32,
        req: &CreateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItemResponse>, ServiceError> {
        info!(
            "📦 Creating inventory item '{}' for supplier_id={supplier_id}",
            req.name
        );

        let item = self.command.create_item(supplier_id, req).await.map_err(|err| {
            error!("❌ Failed to create inventory item: {err:?}");
            ServiceError::from(err)
        })?;

        info!("✅ Created inventory item ID {}", item.item_id);
        Ok(ApiResponse::success(
            "Inventory item created successfully",
            InventoryItemResponse::from(item),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::UserRole, service::test_support::InMemoryStore};
    use std::sync::Arc;

    fn service(store: &Arc<InMemoryStore>) -> InventoryService {
        InventoryService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn created_item_belongs_to_the_caller() {
        let store = Arc::new(InMemoryStore::new());
        store.add_user(1, "Acme Supply", "acme@example.com", UserRole::Supplier);

        let req = CreateInventoryItemRequest {
            name: "Premium Widget".into(),
            description: "High quality widget".into(),
            category: "Widgets".into(),
            price: 2999,
            quantity: 100,
        };
        let response = service(&store).create_item(1, &req).await.unwrap();

        assert_eq!(response.data.supplier_id, 1);
        assert_eq!(response.data.price, 2999);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_supplier() {
        let store = Arc::new(InMemoryStore::new());
        store.add_item(1, 1, "Widget", 1000, 5);
        store.add_item(2, 2, "Gadget", 500, 9);

        let response = service(&store).find_by_supplier(1).await.unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].name, "Widget");
    }
}
