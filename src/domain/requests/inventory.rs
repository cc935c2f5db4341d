use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    /// Minor currency units.
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,
}
