//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - Health check responses

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination, DEFAULT_PER_PAGE};
pub use response::{HealthResponse, HealthStatus};
