use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One product in a supplier's catalogue. `price` is in minor currency units
/// and is the authoritative source for order-line pricing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryItem {
    pub item_id: i32,
    pub supplier_id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub quantity: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
