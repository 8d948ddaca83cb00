//! Order repository trait.

use async_trait::async_trait;

use crate::domain::entities::order::{NewOrder, Order, OrderId};
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order.
    ///
    /// A product or user that does not exist yields `DomainError::NotFound`.
    async fn create(&self, order: NewOrder) -> Result<OrderId, DomainError>;

    /// Orders placed by `user_id`
    async fn find_by_renter(&self, user_id: UserId) -> Result<Vec<Order>, DomainError>;

    /// Orders placed on products owned by `owner_id`
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Order>, DomainError>;
}
