//! Route handlers, grouped by resource.

pub mod auth;
pub mod health;
pub mod order;
pub mod product;
pub mod user;

use std::sync::Arc;

use sharito_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sharito_core::services::{AuthService, ProductService, UserService};

/// Application state that holds shared services
pub struct AppState<U, P, O>
where
    U: UserRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U>>,
    pub product_service: Arc<ProductService<P, O, U>>,
}
