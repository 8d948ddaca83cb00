//! User profile service.

mod service;

pub use service::UserService;
