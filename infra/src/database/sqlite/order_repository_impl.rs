//! SQLite implementation of the OrderRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use sharito_core::domain::entities::order::{NewOrder, Order, OrderId};
use sharito_core::domain::entities::user::UserId;
use sharito_core::errors::DomainError;
use sharito_core::repositories::OrderRepository;

use super::error::{column_error, map_sqlx_error};

/// SQLite implementation of OrderRepository
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &SqliteRow) -> Result<Order, DomainError> {
        Ok(Order {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| column_error("user_id", e))?,
            product_id: row
                .try_get("product_id")
                .map_err(|e| column_error("product_id", e))?,
            order_start: row
                .try_get::<DateTime<Utc>, _>("order_start")
                .map_err(|e| column_error("order_start", e))?,
            order_end: row
                .try_get::<DateTime<Utc>, _>("order_end")
                .map_err(|e| column_error("order_end", e))?,
        })
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<OrderId, DomainError> {
        let result = sqlx::query(
            "INSERT INTO orders (user_id, product_id, order_start, order_end) VALUES (?, ?, ?, ?)",
        )
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(order.order_start)
        .bind(order.order_end)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("order", e))?;

        let order_id = result.last_insert_rowid();
        tracing::info!(
            order_id,
            user_id = order.user_id,
            product_id = order.product_id,
            "Order created"
        );

        Ok(order_id)
    }

    async fn find_by_renter(&self, user_id: UserId) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, product_id, order_start, order_end
            FROM orders
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("order", e))?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT o.id, o.user_id, o.product_id, o.order_start, o.order_end
            FROM orders o
            JOIN products p ON p.id = o.product_id
            WHERE p.owner_id = ?
            ORDER BY o.id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("order", e))?;

        rows.iter().map(Self::row_to_order).collect()
    }
}
