pub mod order;
pub mod product;
pub mod user;

pub use order::OrderRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use order::MockOrderRepository;
#[cfg(test)]
pub use product::MockProductRepository;
#[cfg(test)]
pub use user::MockUserRepository;
