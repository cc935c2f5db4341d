use crate::model::{Order, OrderItem, OrderItemDetail, OrderStatus, OrderWithParty, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counterparty identity attached to an order for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartyResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for PartyResponse {
    fn from(value: User) -> Self {
        PartyResponse {
            id: value.user_id,
            name: value.name,
            email: value.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product: i32,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub price: i64,
}

impl From<OrderItemDetail> for OrderLineResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderLineResponse {
            product: value.product_id,
            product_name: Some(value.product_name),
            quantity: value.quantity,
            price: value.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub retailer_id: i32,
    pub supplier_id: i32,
    /// Populated with the retailer identity on supplier-facing reads.
    pub retailer: Option<PartyResponse>,
    /// Populated with the supplier identity on retailer-facing reads.
    pub supplier: Option<PartyResponse>,
    pub items: Vec<OrderLineResponse>,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub shipping_address: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl OrderResponse {
    pub fn from_created(order: Order, items: Vec<OrderLineResponse>) -> Self {
        OrderResponse {
            id: order.order_id,
            retailer_id: order.retailer_id,
            supplier_id: order.supplier_id,
            retailer: None,
            supplier: None,
            items,
            status: order.status,
            total_amount: order.total_amount,
            shipping_address: order.shipping_address,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }

    /// Supplier view: the joined party is the retailer.
    pub fn from_supplier_view(order: OrderWithParty, items: Vec<OrderLineResponse>) -> Self {
        let party = PartyResponse {
            id: order.party_id,
            name: order.party_name,
            email: order.party_email,
        };
        OrderResponse {
            id: order.order_id,
            retailer_id: order.retailer_id,
            supplier_id: order.supplier_id,
            retailer: Some(party),
            supplier: None,
            items,
            status: order.status,
            total_amount: order.total_amount,
            shipping_address: order.shipping_address,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }

    /// Retailer view: the joined party is the supplier.
    pub fn from_retailer_view(order: OrderWithParty, items: Vec<OrderLineResponse>) -> Self {
        let party = PartyResponse {
            id: order.party_id,
            name: order.party_name,
            email: order.party_email,
        };
        OrderResponse {
            id: order.order_id,
            retailer_id: order.retailer_id,
            supplier_id: order.supplier_id,
            retailer: None,
            supplier: Some(party),
            items,
            status: order.status,
            total_amount: order.total_amount,
            shipping_address: order.shipping_address,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }
}

impl OrderLineResponse {
    pub fn from_item(item: &OrderItem, product_name: Option<String>) -> Self {
        OrderLineResponse {
            product: item.product_id,
            product_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}
