use serde::{Deserialize, Serialize};
use validator::Validate;

use sharito_core::domain::entities::product::{Product, ProductDraft, ProductId};
use sharito_shared::PaginatedResponse;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub per_hour: f64,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[serde(default)]
    pub photos: Vec<String>,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(request: CreateProductRequest) -> Self {
        ProductDraft {
            name: request.name,
            per_hour: request.per_hour,
            description: request.description,
            photos: request.photos,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedResponse {
    pub product_id: ProductId,
}

/// `?page=&search=`; the page is 1-indexed and defaults to the first one
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductListQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    pub search: Option<String>,
}

/// One page of the catalogue. `count` is the number of products matching
/// the search across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub count: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl From<PaginatedResponse<Product>> for ProductListResponse {
    fn from(page: PaginatedResponse<Product>) -> Self {
        Self {
            products: page.data,
            count: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}
