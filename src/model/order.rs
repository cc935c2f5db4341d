use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Order lifecycle states. Any state may be written by the owning supplier;
/// there is no transition-legality guard (the permissive behavior of the
/// original system is preserved, see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub retailer_id: i32,
    pub supplier_id: i32,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub shipping_address: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// One line of an order. `price` is snapshotted from the inventory item at
/// creation time and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
}

/// A resolved line ready for insertion: price already taken from the
/// authoritative inventory row, never from the client.
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
}

/// Order row joined with the counterparty user (retailer for the supplier
/// view, supplier for the retailer view).
#[derive(Debug, Clone, FromRow)]
pub struct OrderWithParty {
    pub order_id: i32,
    pub retailer_id: i32,
    pub supplier_id: i32,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub shipping_address: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub party_id: i32,
    pub party_name: String,
    pub party_email: String,
}

/// Order line joined with the product name for display.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemDetail {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_capitalized_labels() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"Cancelled\"").unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<OrderStatus>("\"Returned\"").is_err());
    }
}
