//! Mock implementation of OrderRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::order::{NewOrder, Order, OrderId};
use crate::domain::entities::product::ProductId;
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;

use super::r#trait::OrderRepository;

/// Mock order repository
///
/// Product ownership is registered explicitly with [`set_owner`](Self::set_owner)
/// since the mock has no join to the product table.
#[derive(Clone, Default)]
pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    owners: Arc<RwLock<HashMap<ProductId, UserId>>>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_owner(&self, product_id: ProductId, owner_id: UserId) {
        self.owners.write().await.insert(product_id, owner_id);
    }

    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<OrderId, DomainError> {
        if !self.owners.read().await.contains_key(&order.product_id) {
            return Err(DomainError::not_found("Product"));
        }

        let mut orders = self.orders.write().await;
        let id = orders.len() as OrderId + 1;
        orders.push(Order {
            id,
            user_id: order.user_id,
            product_id: order.product_id,
            order_start: order.order_start,
            order_end: order.order_end,
        });
        Ok(id)
    }

    async fn find_by_renter(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().filter(|o| o.user_id == user_id).cloned().collect())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Order>, DomainError> {
        let owners = self.owners.read().await;
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| owners.get(&o.product_id) == Some(&owner_id))
            .cloned()
            .collect())
    }
}
