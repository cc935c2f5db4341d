mod command;
mod query;

pub use self::command::InventoryCommandRepository;
pub use self::query::InventoryQueryRepository;
