//! Product repository module.

mod r#trait;
pub use r#trait::ProductRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockProductRepository;
