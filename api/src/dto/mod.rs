//! Request and response bodies of the HTTP API.

pub mod auth;
pub mod order;
pub mod product;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use order::{OrderCreatedResponse, OrdersQuery, RentQuery, RENT_TIME_FORMAT};
pub use product::{
    CreateProductRequest, ProductCreatedResponse, ProductListQuery, ProductListResponse,
};
