//! Product catalogue and rental service module

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::ProductServiceConfig;
pub use service::ProductService;
