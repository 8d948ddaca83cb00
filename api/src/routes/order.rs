//! Rental endpoints

use actix_web::{web, HttpResponse};

use sharito_core::domain::entities::product::ProductId;
use sharito_core::repositories::{OrderRepository, ProductRepository, UserRepository};

use crate::dto::{OrderCreatedResponse, OrdersQuery, RentQuery, RENT_TIME_FORMAT};
use crate::handlers::error::{ApiError, ApiResult};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/order/{product_id}?from=&to=
///
/// Bounds use `YYYY-MM-DD HH:MM` in UTC; `to` must be after `from`.
pub async fn rent_product<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: AuthContext,
    path: web::Path<ProductId>,
    query: web::Query<RentQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let (from, to) = query.window().map_err(|param| {
        ApiError::invalid_input(format!("'{}' must match {}", param, RENT_TIME_FORMAT))
    })?;

    let order_id = state
        .product_service
        .rent_product(auth.identity(), path.into_inner(), from, to)
        .await?;

    Ok(HttpResponse::Ok().json(OrderCreatedResponse { order_id }))
}

/// Handler for GET /api/v1/order?mine=
///
/// `mine=true` lists the orders the caller placed; otherwise the orders
/// placed on the caller's products. Each entry carries the product, the
/// renter and the price for the rented hours.
pub async fn get_orders<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: AuthContext,
    query: web::Query<OrdersQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let orders = state
        .product_service
        .get_orders(auth.identity(), query.mine)
        .await?;

    Ok(HttpResponse::Ok().json(orders))
}
