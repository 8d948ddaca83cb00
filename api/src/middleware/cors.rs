//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use sharito_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// An empty origin list (or `*`) accepts any origin without credentials;
/// this is the development setup. Otherwise only the listed origins are
/// accepted and credentials may be allowed for them. `X-Auth` is exposed so
/// browser clients can read the token returned by register and login.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .expose_headers(config.exposed_headers.iter().map(String::as_str))
        .max_age(config.max_age);

    if config.is_permissive() {
        if config.allow_credentials {
            tracing::warn!("Ignoring allow_credentials for permissive CORS");
        }
        tracing::info!("Configuring permissive CORS");
        return cors.allow_any_origin();
    }

    for origin in &config.allowed_origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
