//! In-memory repository doubles used by the service tests. Each trait is
//! implemented over the same shared store so ownership scoping behaves like
//! the real database.

use crate::{
    abstract_trait::{
        InventoryCommandRepositoryTrait, InventoryQueryRepositoryTrait,
        OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, UserCommandRepositoryTrait,
        UserQueryRepositoryTrait,
    },
    domain::requests::{CreateInventoryItemRequest, RegisterRequest},
    errors::RepositoryError,
    model::{
        InventoryItem, NewOrderLine, Order, OrderItem, OrderItemDetail, OrderStatus,
        OrderWithParty, User, UserRole,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<Vec<User>>,
    pub items: Mutex<Vec<InventoryItem>>,
    pub orders: Mutex<Vec<Order>>,
    pub order_items: Mutex<Vec<OrderItem>>,
    tick: Mutex<i64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_timestamp(&self) -> NaiveDateTime {
        let mut tick = self.tick.lock().unwrap();
        *tick += 1;
        DateTime::from_timestamp(*tick, 0).unwrap().naive_utc()
    }

    pub fn add_user(&self, user_id: i32, name: &str, email: &str, role: UserRole) {
        self.users.lock().unwrap().push(User {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            password: "hashed".to_string(),
            role,
            created_at: Some(self.next_timestamp()),
            updated_at: None,
        });
    }

    pub fn add_item(&self, item_id: i32, supplier_id: i32, name: &str, price: i64, quantity: i32) {
        self.items.lock().unwrap().push(InventoryItem {
            item_id,
            supplier_id,
            name: name.to_string(),
            description: String::new(),
            category: "General".to_string(),
            price,
            quantity,
            created_at: Some(self.next_timestamp()),
            updated_at: None,
        });
    }

    pub fn order_status(&self, order_id: i32) -> Option<OrderStatus> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.order_id == order_id)
            .map(|o| o.status)
    }

    fn with_party(&self, order: &Order, party_id: i32) -> OrderWithParty {
        let users = self.users.lock().unwrap();
        let party = users
            .iter()
            .find(|u| u.user_id == party_id)
            .expect("party user must exist");
        OrderWithParty {
            order_id: order.order_id,
            retailer_id: order.retailer_id,
            supplier_id: order.supplier_id,
            status: order.status,
            total_amount: order.total_amount,
            shipping_address: order.shipping_address.clone(),
            created_at: order.created_at,
            updated_at: order.updated_at,
            party_id: party.user_id,
            party_name: party.name.clone(),
            party_email: party.email.clone(),
        }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_suppliers(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.role == UserRole::Supplier)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryStore {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        hashed_password: &str,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == req.email) {
            return Err(RepositoryError::AlreadyExists(
                "Email is already registered".to_string(),
            ));
        }
        let user = User {
            user_id: users.iter().map(|u| u.user_id).max().unwrap_or(0) + 1,
            name: req.name.clone(),
            email: req.email.clone(),
            password: hashed_password.to_string(),
            role: req.role,
            created_at: Some(self.next_timestamp()),
            updated_at: None,
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl InventoryQueryRepositoryTrait for InMemoryStore {
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<InventoryItem>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.supplier_id == supplier_id)
            .cloned()
            .collect())
    }

    async fn find_items_for_order(
        &self,
        product_ids: &[i32],
        supplier_id: i32,
    ) -> Result<Vec<InventoryItem>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.supplier_id == supplier_id && product_ids.contains(&i.item_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl InventoryCommandRepositoryTrait for InMemoryStore {
    async fn create_item(
        &self,
        supplier_id: i32,
        req: &CreateInventoryItemRequest,
    ) -> Result<InventoryItem, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let item = InventoryItem {
            item_id: items.iter().map(|i| i.item_id).max().unwrap_or(0) + 1,
            supplier_id,
            name: req.name.clone(),
            description: req.description.clone(),
            category: req.category.clone(),
            price: req.price,
            quantity: req.quantity,
            created_at: Some(self.next_timestamp()),
            updated_at: None,
        };
        items.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryStore {
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<OrderWithParty>, RepositoryError> {
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.supplier_id == supplier_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders
            .iter()
            .map(|o| self.with_party(o, o.retailer_id))
            .collect())
    }

    async fn find_by_retailer(
        &self,
        retailer_id: i32,
    ) -> Result<Vec<OrderWithParty>, RepositoryError> {
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.retailer_id == retailer_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders
            .iter()
            .map(|o| self.with_party(o, o.supplier_id))
            .collect())
    }

    async fn find_items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(self
            .order_items
            .lock()
            .unwrap()
            .iter()
            .filter(|oi| order_ids.contains(&oi.order_id))
            .map(|oi| OrderItemDetail {
                order_item_id: oi.order_item_id,
                order_id: oi.order_id,
                product_id: oi.product_id,
                product_name: items
                    .iter()
                    .find(|i| i.item_id == oi.product_id)
                    .map(|i| i.name.clone())
                    .unwrap_or_default(),
                quantity: oi.quantity,
                price: oi.price,
            })
            .collect())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryStore {
    async fn create_order(
        &self,
        retailer_id: i32,
        supplier_id: i32,
        shipping_address: &str,
        total_amount: i64,
        lines: &[NewOrderLine],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let mut order_items = self.order_items.lock().unwrap();

        let order = Order {
            order_id: orders.iter().map(|o| o.order_id).max().unwrap_or(0) + 1,
            retailer_id,
            supplier_id,
            status: OrderStatus::Pending,
            total_amount,
            shipping_address: shipping_address.to_string(),
            created_at: Some(self.next_timestamp()),
            updated_at: None,
        };

        let mut inserted = Vec::with_capacity(lines.len());
        for line in lines {
            let item = OrderItem {
                order_item_id: order_items.iter().map(|i| i.order_item_id).max().unwrap_or(0)
                    + 1
                    + inserted.len() as i32,
                order_id: order.order_id,
                product_id: line.product_id,
                quantity: line.quantity,
                price: line.price,
            };
            inserted.push(item);
        }
        order_items.extend(inserted.iter().cloned());
        orders.push(order.clone());
        Ok((order, inserted))
    }

    async fn update_status(
        &self,
        order_id: i32,
        supplier_id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let tick = self.next_timestamp();
        match orders
            .iter_mut()
            .find(|o| o.order_id == order_id && o.supplier_id == supplier_id)
        {
            Some(order) => {
                order.status = status;
                order.updated_at = Some(tick);
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }
}
