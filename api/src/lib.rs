//! # Sharito API
//!
//! HTTP surface of the Sharito rental marketplace: registration and login,
//! the product catalogue and rental orders. Protected routes run the
//! authorization pipeline in [`middleware::JwtAuth`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
