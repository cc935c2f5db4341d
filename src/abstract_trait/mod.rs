mod auth;
mod hashing;
mod inventory;
mod jwt;
mod order;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::inventory::{
    DynInventoryCommandRepository, DynInventoryQueryRepository, DynInventoryService,
    InventoryCommandRepositoryTrait, InventoryQueryRepositoryTrait, InventoryServiceTrait,
};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynOrderService,
    OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, DynUserService,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait, UserServiceTrait,
};
