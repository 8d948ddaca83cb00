//! Shared fixtures for the HTTP integration tests.
//!
//! Every test gets its own in-memory database and a signing key read from a
//! temporary file, the same way the binary loads it at startup.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header, StatusCode},
    test, web, App,
};
use serde_json::{json, Value};

use sharito_api::app::{build_state, create_app, SqliteAppState};
use sharito_core::services::{AuthorizationPipeline, CredentialHasher, SigningKey, TokenService};
use sharito_infra::DatabasePool;
use sharito_shared::{AppConfig, DatabaseConfig};

pub const PASSWORD: &str = "correct horse battery staple";

pub struct TestContext {
    pub config: AppConfig,
    pub tokens: Arc<TokenService>,
    state: web::Data<SqliteAppState>,
    pipeline: web::Data<AuthorizationPipeline>,
    database: web::Data<DatabasePool>,
}

impl TestContext {
    pub async fn new() -> Self {
        let mut key_file = tempfile::NamedTempFile::new().unwrap();
        key_file.write_all(&[42u8; 48]).unwrap();

        let mut config = AppConfig::default();
        config.database = DatabaseConfig::in_memory();
        config.auth.signing_key_path = key_file.path().to_path_buf();

        let key = SigningKey::from_file(&config.auth.signing_key_path).unwrap();
        let tokens = Arc::new(TokenService::new(key));

        let database = DatabasePool::new(config.database.clone()).await.unwrap();
        database.run_migrations().await.unwrap();

        let state = build_state(&database, tokens.clone(), CredentialHasher::new(), &config);

        Self {
            pipeline: web::Data::new(AuthorizationPipeline::new(tokens.clone())),
            state: web::Data::new(state),
            database: web::Data::new(database),
            tokens,
            config,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        create_app(
            self.state.clone(),
            self.pipeline.clone(),
            self.database.clone(),
            &self.config,
        )
    }

    pub fn database(&self) -> &DatabasePool {
        &self.database
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Register `login` and return the issued token
pub async fn register<S, B>(app: &S, login: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({
            "login": login,
            "first_name": "Test",
            "last_name": "User",
            "email": format!("{}@example.com", login),
            "password": PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "register {}", login);

    let body: Value = test::read_body_json(resp).await;
    body["token"].as_str().unwrap().to_string()
}

/// Create a product as the bearer of `token` and return its id
pub async fn create_product<S, B>(app: &S, token: &str, name: &str, photos: &[&str]) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/product")
        .insert_header(bearer(token))
        .set_json(json!({
            "name": name,
            "per_hour": 4.0,
            "description": format!("{} for rent", name),
            "photos": photos,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "create product {}", name);

    let body: Value = test::read_body_json(resp).await;
    body["product_id"].as_i64().unwrap()
}
