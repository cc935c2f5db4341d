mod auth;
mod inventory;
mod order;

pub use self::auth::{AuthRequest, RegisterRequest};
pub use self::inventory::CreateInventoryItemRequest;
pub use self::order::{CreateOrderLineRequest, CreateOrderRequest, UpdateOrderStatusRequest};
