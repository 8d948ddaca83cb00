//! Product catalogue endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use sharito_core::domain::entities::product::ProductId;
use sharito_core::repositories::{OrderRepository, ProductRepository, UserRepository};

use crate::dto::{CreateProductRequest, ProductCreatedResponse, ProductListQuery, ProductListResponse};
use crate::handlers::error::ApiResult;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/product?page=&search=
///
/// Public. Ten products per page, each with its main photo only.
pub async fn list_products<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    query: web::Query<ProductListQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    query.validate()?;

    let page = state
        .product_service
        .list_products(query.page.unwrap_or(1), query.search.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(ProductListResponse::from(page)))
}

/// Handler for POST /api/v1/product
///
/// Creates the product with all of its photos, owned by the caller.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Drill",
///     "per_hour": 3.5,
///     "description": "Cordless, two batteries",
///     "photos": ["a.jpg", "b.jpg"]
/// }
/// ```
pub async fn create_product<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: AuthContext,
    request: web::Json<CreateProductRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let product_id = state
        .product_service
        .add_product(auth.identity(), request.into())
        .await?;

    Ok(HttpResponse::Ok().json(ProductCreatedResponse { product_id }))
}

/// Handler for GET /api/v1/product/{product_id}
///
/// The product with every photo, plus its owner's profile.
pub async fn get_product<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    _auth: AuthContext,
    path: web::Path<ProductId>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let product = state
        .product_service
        .get_product_with_owner(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(product))
}
