mod auth;
mod inventory;
mod order;
mod user;

pub use self::auth::AuthService;
pub use self::inventory::InventoryService;
pub use self::order::OrderService;
pub use self::user::UserService;

#[cfg(test)]
pub(crate) mod test_support;
