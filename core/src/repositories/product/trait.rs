//! Product repository trait.

use async_trait::async_trait;

use crate::domain::entities::product::{NewProduct, Product, ProductId};
use crate::errors::DomainError;
use sharito_shared::Pagination;

/// Persistence of product aggregates
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a product row and all of its photo rows as one unit.
    ///
    /// Either every row is committed or none is: a failure at any step after
    /// the transaction starts rolls the whole write back before the error is
    /// returned, and dropping the returned future mid-flight has the same
    /// effect.
    async fn write_product_aggregate(&self, product: &NewProduct) -> Result<ProductId, DomainError>;

    /// Find a product with all of its photos
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    /// One page of products whose name contains `search` (case-insensitive).
    ///
    /// Each product carries only its main photo, the earliest one attached.
    async fn list(
        &self,
        search: Option<&str>,
        pagination: Pagination,
    ) -> Result<Vec<Product>, DomainError>;

    /// Number of products matching the same filter as [`list`](Self::list)
    async fn count(&self, search: Option<&str>) -> Result<u64, DomainError>;
}
