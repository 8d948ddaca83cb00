//! Products, rentals and orders

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sharito_shared::{PaginatedResponse, Pagination};

use crate::domain::entities::order::{NewOrder, OrderDetails, OrderId};
use crate::domain::entities::product::{Product, ProductDraft, ProductId, ProductWithOwner};
use crate::domain::entities::user::{User, UserId};
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{OrderRepository, ProductRepository, UserRepository};

use super::config::ProductServiceConfig;

/// Product catalogue and rental service
pub struct ProductService<P, O, U>
where
    P: ProductRepository,
    O: OrderRepository,
    U: UserRepository,
{
    product_repository: Arc<P>,
    order_repository: Arc<O>,
    user_repository: Arc<U>,
    config: ProductServiceConfig,
}

impl<P, O, U> ProductService<P, O, U>
where
    P: ProductRepository,
    O: OrderRepository,
    U: UserRepository,
{
    pub fn new(
        product_repository: Arc<P>,
        order_repository: Arc<O>,
        user_repository: Arc<U>,
        config: ProductServiceConfig,
    ) -> Self {
        Self {
            product_repository,
            order_repository,
            user_repository,
            config,
        }
    }

    /// Create a product owned by the caller, together with its photos.
    ///
    /// The write is all-or-nothing. If it does not finish within the
    /// configured deadline the write is abandoned, rolled back, and reported
    /// as a database fault.
    pub async fn add_product(&self, identity: &Identity, draft: ProductDraft) -> DomainResult<ProductId> {
        Self::validate_draft(&draft)?;
        let product = draft.owned_by(identity.user_id());

        let write = self.product_repository.write_product_aggregate(&product);
        let product_id = tokio::time::timeout(self.config.write_timeout, write)
            .await
            .map_err(|_| {
                tracing::error!(
                    owner_id = product.owner_id,
                    timeout_ms = self.config.write_timeout.as_millis() as u64,
                    "Product write exceeded its deadline"
                );
                DomainError::database("product write timed out")
            })??;

        tracing::info!(
            product_id,
            owner_id = product.owner_id,
            photos = product.photos.len(),
            "Product created"
        );
        Ok(product_id)
    }

    /// A product with all its photos and its owner's profile
    pub async fn get_product_with_owner(&self, product_id: ProductId) -> DomainResult<ProductWithOwner> {
        let product = self
            .product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        let user = self
            .user_repository
            .find_by_id(product.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        Ok(ProductWithOwner { product, user })
    }

    /// One page of products, optionally filtered by a name substring.
    ///
    /// `page` is 1-indexed; 0 is treated as 1.
    pub async fn list_products(
        &self,
        page: u32,
        search: Option<&str>,
    ) -> DomainResult<PaginatedResponse<Product>> {
        let pagination = Pagination::new(page, self.config.per_page);
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let products = self.product_repository.list(search, pagination).await?;
        let total = self.product_repository.count(search).await?;

        Ok(PaginatedResponse::new(products, pagination, total))
    }

    /// Rent a product for the caller over `[from, to)`
    pub async fn rent_product(
        &self,
        identity: &Identity,
        product_id: ProductId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<OrderId> {
        if to <= from {
            return Err(ValidationError::InvalidTimeRange.into());
        }

        if self.product_repository.find_by_id(product_id).await?.is_none() {
            return Err(DomainError::not_found("Product"));
        }

        let order_id = self
            .order_repository
            .create(NewOrder {
                user_id: identity.user_id(),
                product_id,
                order_start: from,
                order_end: to,
            })
            .await?;

        tracing::info!(order_id, product_id, user_id = identity.user_id(), "Product rented");
        Ok(order_id)
    }

    /// Orders visible to the caller.
    ///
    /// `mine = true` lists the orders the caller placed; otherwise the orders
    /// placed on products the caller owns.
    pub async fn get_orders(&self, identity: &Identity, mine: bool) -> DomainResult<Vec<OrderDetails>> {
        let orders = if mine {
            self.order_repository.find_by_renter(identity.user_id()).await?
        } else {
            self.order_repository.find_by_owner(identity.user_id()).await?
        };

        let mut products: HashMap<ProductId, Product> = HashMap::new();
        let mut users: HashMap<UserId, User> = HashMap::new();
        let mut details = Vec::with_capacity(orders.len());

        for order in orders {
            let product = match products.get(&order.product_id) {
                Some(product) => product.clone(),
                None => {
                    let product = self
                        .product_repository
                        .find_by_id(order.product_id)
                        .await?
                        .ok_or_else(|| DomainError::not_found("Product"))?;
                    products.insert(order.product_id, product.clone());
                    product
                }
            };

            let user = match users.get(&order.user_id) {
                Some(user) => user.clone(),
                None => {
                    let user = self
                        .user_repository
                        .find_by_id(order.user_id)
                        .await?
                        .ok_or_else(|| DomainError::not_found("User"))?;
                    users.insert(order.user_id, user.clone());
                    user
                }
            };

            details.push(OrderDetails::new(order, product, user));
        }

        Ok(details)
    }

    fn validate_draft(draft: &ProductDraft) -> DomainResult<()> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if !draft.per_hour.is_finite() || draft.per_hour < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "per_hour".to_string(),
            }
            .into());
        }
        if draft.photos.iter().any(|p| p.trim().is_empty()) {
            return Err(ValidationError::InvalidFormat {
                field: "photos".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
