use crate::model::InventoryItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemResponse {
    pub id: i32,
    pub supplier_id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub quantity: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<InventoryItem> for InventoryItemResponse {
    fn from(value: InventoryItem) -> Self {
        InventoryItemResponse {
            id: value.item_id,
            supplier_id: value.supplier_id,
            name: value.name,
            description: value.description,
            category: value.category,
            price: value.price,
            quantity: value.quantity,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
