mod api;
mod inventory;
mod order;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::inventory::InventoryItemResponse;
pub use self::order::{OrderLineResponse, OrderResponse, PartyResponse};
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
