use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    pub supplier_id: i32,

    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<CreateOrderLineRequest>,

    #[validate(length(min = 1, message = "Shipping address is required"))]
    pub shipping_address: String,
}

/// One requested line. Note there is deliberately no price field: line prices
/// are resolved server-side from the inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderLineRequest {
    #[validate(range(min = 1))]
    pub product: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateOrderRequest {
        CreateOrderRequest {
            supplier_id: 1,
            items: vec![CreateOrderLineRequest {
                product: 1,
                quantity: 2,
            }],
            shipping_address: "123 St".into(),
        }
    }

    #[test]
    fn accepts_a_well_formed_order() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_item_list() {
        let mut req = valid_request();
        req.items.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_zero_quantity_lines() {
        let mut req = valid_request();
        req.items[0].quantity = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_a_missing_shipping_address() {
        let mut req = valid_request();
        req.shipping_address.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(valid_request()).unwrap();
        assert!(json.get("supplierId").is_some());
        assert!(json.get("shippingAddress").is_some());
    }
}
