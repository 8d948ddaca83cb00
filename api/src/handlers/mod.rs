pub mod error;

pub use error::{kind_response, ApiError, ApiResult};
