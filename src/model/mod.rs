mod inventory;
mod order;
mod user;

pub use self::inventory::InventoryItem;
pub use self::order::{NewOrderLine, Order, OrderItem, OrderItemDetail, OrderStatus, OrderWithParty};
pub use self::user::{User, UserRole};
