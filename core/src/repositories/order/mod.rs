//! Order repository module.

mod r#trait;
pub use r#trait::OrderRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockOrderRepository;
