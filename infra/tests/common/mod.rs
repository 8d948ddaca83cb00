//! Shared fixtures for the SQLite integration tests.

#![allow(dead_code)]

use sharito_core::domain::entities::product::NewProduct;
use sharito_core::domain::entities::user::{NewUser, User};
use sharito_core::domain::value_objects::Credential;
use sharito_core::repositories::UserRepository;
use sharito_infra::{DatabasePool, SqliteUserRepository};
use sharito_shared::DatabaseConfig;

/// Fresh in-memory database with the schema applied
pub async fn migrated_pool() -> DatabasePool {
    let pool = DatabasePool::new(DatabaseConfig::in_memory())
        .await
        .expect("in-memory pool");
    pool.run_migrations().await.expect("migrations");
    pool
}

pub fn new_user(login: &str) -> NewUser {
    NewUser {
        login: login.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{}@example.com", login),
        credential: Credential::new(vec![7; 64], vec![9; 64]),
    }
}

pub async fn seed_user(pool: &DatabasePool, login: &str) -> User {
    SqliteUserRepository::new(pool.get_pool().clone())
        .create(new_user(login))
        .await
        .expect("seed user")
}

pub fn product(owner_id: i64, name: &str, photos: &[&str]) -> NewProduct {
    NewProduct {
        owner_id,
        name: name.to_string(),
        per_hour: 2.5,
        description: None,
        photos: photos.iter().map(|p| p.to_string()).collect(),
    }
}

pub async fn count_rows(pool: &DatabasePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool.get_pool())
        .await
        .expect("count rows")
}
