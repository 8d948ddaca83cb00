//! Mock implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::product::{NewProduct, Product, ProductId};
use crate::errors::DomainError;
use sharito_shared::Pagination;

use super::r#trait::ProductRepository;

/// Mock product repository storing aggregates in memory
///
/// `reject_photo` makes any aggregate containing that photo fail before
/// anything is stored.
#[derive(Clone, Default)]
pub struct MockProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    reject_photo: Option<String>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_photo(photo: impl Into<String>) -> Self {
        Self {
            reject_photo: Some(photo.into()),
            ..Self::default()
        }
    }

    pub async fn count_stored(&self) -> usize {
        self.products.read().await.len()
    }

    fn matches(product: &Product, search: Option<&str>) -> bool {
        match search {
            Some(term) => product.name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn write_product_aggregate(&self, product: &NewProduct) -> Result<ProductId, DomainError> {
        if let Some(rejected) = &self.reject_photo {
            if product.photos.iter().any(|p| p == rejected) {
                return Err(DomainError::database("photo insert failed"));
            }
        }

        let mut products = self.products.write().await;
        let id = products.len() as ProductId + 1;
        products.insert(
            id,
            Product {
                id,
                owner_id: product.owner_id,
                name: product.name.clone(),
                per_hour: product.per_hour,
                description: product.description.clone(),
                photos: product.photos.clone(),
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn list(
        &self,
        search: Option<&str>,
        pagination: Pagination,
    ) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| Self::matches(p, search))
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .map(|p| Product {
                photos: p.photos.iter().take(1).cloned().collect(),
                ..p.clone()
            })
            .collect())
    }

    async fn count(&self, search: Option<&str>) -> Result<u64, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| Self::matches(p, search)).count() as u64)
    }
}
