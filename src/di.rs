use crate::{
    abstract_trait::{
        DynAuthService, DynHashing, DynInventoryService, DynJwtService, DynOrderService,
        DynUserQueryRepository, DynUserService,
    },
    config::ConnectionPool,
    repository::{
        InventoryCommandRepository, InventoryQueryRepository, OrderCommandRepository,
        OrderQueryRepository, UserCommandRepository, UserQueryRepository,
    },
    service::{AuthService, InventoryService, OrderService, UserService},
};
use std::sync::Arc;

/// Wires repositories into services over one connection pool.
#[derive(Clone)]
pub struct DependenciesInject {
    pub user_query: DynUserQueryRepository,
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub inventory_service: DynInventoryService,
    pub order_service: DynOrderService,
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let user_query: DynUserQueryRepository = Arc::new(UserQueryRepository::new(pool.clone()));
        let user_command = Arc::new(UserCommandRepository::new(pool.clone()));

        let inventory_query = Arc::new(InventoryQueryRepository::new(pool.clone()));
        let inventory_command = Arc::new(InventoryCommandRepository::new(pool.clone()));

        let order_query = Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command = Arc::new(OrderCommandRepository::new(pool));

        let auth_service: DynAuthService = Arc::new(AuthService::new(
            user_query.clone(),
            user_command,
            hashing,
            jwt,
        ));
        let user_service: DynUserService = Arc::new(UserService::new(user_query.clone()));
        let inventory_service: DynInventoryService = Arc::new(InventoryService::new(
            inventory_query.clone(),
            inventory_command,
        ));
        let order_service: DynOrderService = Arc::new(OrderService::new(
            order_query,
            order_command,
            inventory_query,
            user_query.clone(),
        ));

        Self {
            user_query,
            auth_service,
            user_service,
            inventory_service,
            order_service,
        }
    }
}
