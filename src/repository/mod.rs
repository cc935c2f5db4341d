pub mod inventory;
pub mod order;
pub mod user;

pub use self::inventory::{InventoryCommandRepository, InventoryQueryRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::user::{UserCommandRepository, UserQueryRepository};
