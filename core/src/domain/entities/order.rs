//! Rental orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};
use super::user::{User, UserId};

pub type OrderId = i64;

/// A rental of one product by one user for a time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub order_start: DateTime<Utc>,
    pub order_end: DateTime<Utc>,
}

impl Order {
    /// Rented duration in fractional hours
    pub fn hours(&self) -> f64 {
        (self.order_end - self.order_start).num_seconds() as f64 / 3600.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub order_start: DateTime<Utc>,
    pub order_end: DateTime<Utc>,
}

/// Order enriched with the rented product, the renter and the price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: OrderId,
    pub order_start: DateTime<Utc>,
    pub order_end: DateTime<Utc>,
    pub user: User,
    pub product: Product,
    pub price: f64,
}

impl OrderDetails {
    pub fn new(order: Order, product: Product, user: User) -> Self {
        let price = order.hours() * product.per_hour;
        Self {
            id: order.id,
            order_start: order.order_start,
            order_end: order.order_end,
            user,
            product,
            price,
        }
    }
}
