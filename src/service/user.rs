use crate::{
    abstract_trait::{DynUserQueryRepository, UserServiceTrait},
    domain::responses::{ApiResponse, UserResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserService {
    query: DynUserQueryRepository,
}

impl UserService {
    pub fn new(query: DynUserQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_suppliers(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        info!("🔍 Fetching supplier directory");

        let suppliers = self.query.find_suppliers().await.map_err(|err| {
            error!("❌ Failed to fetch suppliers: {err:?}");
            ServiceError::from(err)
        })?;

        let data: Vec<UserResponse> = suppliers.into_iter().map(UserResponse::from).collect();
        info!("✅ Found {} suppliers", data.len());

        Ok(ApiResponse::success(
            "Suppliers retrieved successfully",
            data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::UserRole, service::test_support::InMemoryStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn lists_only_suppliers() {
        let store = Arc::new(InMemoryStore::new());
        store.add_user(1, "Acme Supply", "acme@example.com", UserRole::Supplier);
        store.add_user(2, "Corner Shop", "shop@example.com", UserRole::Retailer);
        store.add_user(3, "Bulk Goods", "bulk@example.com", UserRole::Supplier);

        let service = UserService::new(store.clone());
        let response = service.find_suppliers().await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.len(), 2);
        assert!(response.data.iter().all(|u| u.role == UserRole::Supplier));
    }
}
