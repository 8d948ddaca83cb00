//! Domain entities representing core business objects.

pub mod order;
pub mod product;
pub mod token;
pub mod user;

pub use order::{NewOrder, Order, OrderDetails, OrderId};
pub use product::{NewProduct, Product, ProductDraft, ProductId, ProductWithOwner};
pub use token::{Claims, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
pub use user::{NewUser, Registration, User, UserId};
