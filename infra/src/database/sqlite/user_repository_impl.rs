//! SQLite implementation of the UserRepository trait.
//!
//! The password credential is stored as two BLOB columns, `salt` and
//! `password_hash`. Login uniqueness is enforced by the schema, so two
//! concurrent registrations of the same login resolve to one `Conflict`.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use sharito_core::domain::entities::user::{NewUser, User, UserId};
use sharito_core::domain::value_objects::Credential;
use sharito_core::errors::DomainError;
use sharito_core::repositories::UserRepository;

use super::error::{column_error, map_sqlx_error};

const USER_COLUMNS: &str = "id, login, first_name, last_name, email, salt, password_hash";

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &SqliteRow) -> Result<User, DomainError> {
        let salt: Vec<u8> = row.try_get("salt").map_err(|e| column_error("salt", e))?;
        let hash: Vec<u8> = row
            .try_get("password_hash")
            .map_err(|e| column_error("password_hash", e))?;

        Ok(User {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            login: row.try_get("login").map_err(|e| column_error("login", e))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| column_error("first_name", e))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| column_error("last_name", e))?,
            email: row.try_get("email").map_err(|e| column_error("email", e))?,
            credential: Credential::new(salt, hash),
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (login, first_name, last_name, email, salt, password_hash)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.login)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(user.credential.salt())
            .bind(user.credential.hash())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("user", e))?;

        let id = result.last_insert_rowid();
        tracing::info!(user_id = id, "User created");

        Ok(user.with_id(id))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE login = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}
