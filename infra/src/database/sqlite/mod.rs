//! SQLite implementations of the core repository traits.

mod error;
pub mod order_repository_impl;
pub mod product_repository_impl;
pub mod user_repository_impl;

pub use order_repository_impl::SqliteOrderRepository;
pub use product_repository_impl::SqliteProductRepository;
pub use user_repository_impl::SqliteUserRepository;
