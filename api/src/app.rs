//! Application state and factory
//!
//! Builds the services on top of the SQLite repositories and assembles the
//! Actix-web application with its middleware and routes.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use sharito_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sharito_core::services::{
    AuthService, AuthServiceConfig, AuthorizationPipeline, CredentialHasher, ProductService,
    ProductServiceConfig, TokenService, UserService,
};
use sharito_infra::{
    DatabasePool, SqliteOrderRepository, SqliteProductRepository, SqliteUserRepository,
};
use sharito_shared::{error_codes, AppConfig, ErrorResponse};

use crate::handlers::error::ApiError;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, health, order, product, user, AppState};

/// State backed by the SQLite repositories
pub type SqliteAppState = AppState<SqliteUserRepository, SqliteProductRepository, SqliteOrderRepository>;

/// Wire repositories and services over one connection pool
pub fn build_state(
    database: &DatabasePool,
    tokens: Arc<TokenService>,
    hasher: CredentialHasher,
    config: &AppConfig,
) -> SqliteAppState {
    let pool = database.get_pool().clone();
    let users = Arc::new(SqliteUserRepository::new(pool.clone()));
    let products = Arc::new(SqliteProductRepository::new(pool.clone()));
    let orders = Arc::new(SqliteOrderRepository::new(pool));

    AppState {
        auth_service: Arc::new(AuthService::new(
            users.clone(),
            tokens,
            hasher,
            AuthServiceConfig::from(&config.auth),
        )),
        user_service: Arc::new(UserService::new(users.clone())),
        product_service: Arc::new(ProductService::new(
            products,
            orders,
            users,
            ProductServiceConfig::from(&config.database),
        )),
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    pipeline: web::Data<AuthorizationPipeline>,
    database: web::Data<DatabasePool>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, _req| ApiError::invalid_input(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::invalid_input(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| ApiError::invalid_input(err.to_string()).into());

    App::new()
        .app_data(state)
        .app_data(pipeline)
        .app_data(database)
        .app_data(json_config)
        .app_data(query_config)
        .app_data(path_config)
        // Registered last, TracingLogger wraps CORS and sees every request
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, P, O>))
                        .route("/login", web::post().to(auth::login::<U, P, O>)),
                )
                .service(
                    web::scope("/user")
                        .wrap(JwtAuth::new())
                        .route("", web::get().to(user::get_user::<U, P, O>)),
                )
                .service(
                    web::scope("/product")
                        .route("", web::get().to(product::list_products::<U, P, O>))
                        .route(
                            "",
                            web::post()
                                .to(product::create_product::<U, P, O>)
                                .wrap(JwtAuth::new()),
                        )
                        .route(
                            "/{product_id}",
                            web::get()
                                .to(product::get_product::<U, P, O>)
                                .wrap(JwtAuth::new()),
                        ),
                )
                .service(
                    web::scope("/order")
                        .wrap(JwtAuth::new())
                        .route("", web::get().to(order::get_orders::<U, P, O>))
                        .route("/{product_id}", web::post().to(order::rent_product::<U, P, O>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "Resource not found",
    ))
}
