use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use sharito_api::app::{build_state, create_app};
use sharito_api::telemetry::init_tracing;
use sharito_core::services::{AuthorizationPipeline, CredentialHasher, SigningKey, TokenService};
use sharito_infra::DatabasePool;
use sharito_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Sharito API server"
    );

    // Read once at startup and never replaced while running
    let key = SigningKey::from_file(&config.auth.signing_key_path).with_context(|| {
        format!(
            "failed to load JWT signing key from {}",
            config.auth.signing_key_path.display()
        )
    })?;
    let tokens = Arc::new(TokenService::new(key));
    let pipeline = web::Data::new(AuthorizationPipeline::new(tokens.clone()));

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to open database")?;
    database
        .run_migrations()
        .await
        .context("failed to migrate database")?;

    let state = web::Data::new(build_state(
        &database,
        tokens,
        CredentialHasher::new(),
        &config,
    ));
    let database_data = web::Data::new(database.clone());

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || {
        create_app(
            state.clone(),
            pipeline.clone(),
            database_data.clone(),
            &app_config,
        )
    })
    .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
