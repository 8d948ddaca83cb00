//! Authorization pipeline turning a bearer token into a caller identity.

mod pipeline;

pub use pipeline::AuthorizationPipeline;
