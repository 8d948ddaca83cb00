//! SQLite implementation of the ProductRepository trait.
//!
//! A product and its photos form one aggregate. The write path keeps every
//! fallible insert inside [`SqliteProductRepository::insert_aggregate`] and
//! settles the transaction in exactly one place: commit on success, rollback
//! on any failure. If the surrounding future is dropped before that point
//! the `Transaction` guard rolls back when it goes out of scope.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, Sqlite, SqlitePool, Transaction};

use sharito_core::domain::entities::product::{NewProduct, Product, ProductId};
use sharito_core::errors::DomainError;
use sharito_core::repositories::ProductRepository;
use sharito_shared::Pagination;

use super::error::{column_error, map_sqlx_error};

/// SQLite implementation of ProductRepository
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the product row, then one row per photo.
    async fn insert_aggregate(
        tx: &mut Transaction<'static, Sqlite>,
        product: &NewProduct,
    ) -> Result<ProductId, sqlx::Error> {
        let product_id = sqlx::query(
            "INSERT INTO products (owner_id, name, per_hour, description) VALUES (?, ?, ?, ?)",
        )
        .bind(product.owner_id)
        .bind(&product.name)
        .bind(product.per_hour)
        .bind(product.description.as_deref())
        .execute(&mut **tx)
        .await?
        .last_insert_rowid();

        for photo in &product.photos {
            sqlx::query("INSERT INTO product_photos (product_id, photo) VALUES (?, ?)")
                .bind(product_id)
                .bind(photo)
                .execute(&mut **tx)
                .await?;
        }

        Ok(product_id)
    }

    fn row_to_product(row: &SqliteRow, photos: Vec<String>) -> Result<Product, DomainError> {
        Ok(Product {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            owner_id: row
                .try_get("owner_id")
                .map_err(|e| column_error("owner_id", e))?,
            name: row.try_get("name").map_err(|e| column_error("name", e))?,
            per_hour: row
                .try_get("per_hour")
                .map_err(|e| column_error("per_hour", e))?,
            description: row
                .try_get("description")
                .map_err(|e| column_error("description", e))?,
            photos,
        })
    }
}

/// `%term%` with LIKE wildcards in the term escaped by `\`
fn like_pattern(search: Option<&str>) -> Option<String> {
    let term = search.map(str::trim).filter(|term| !term.is_empty())?;

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn write_product_aggregate(&self, product: &NewProduct) -> Result<ProductId, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("product", e))?;

        match Self::insert_aggregate(&mut tx, product).await {
            Ok(product_id) => {
                tx.commit().await.map_err(|e| map_sqlx_error("product", e))?;
                tracing::info!(
                    product_id,
                    owner_id = product.owner_id,
                    photos = product.photos.len(),
                    "Product aggregate committed"
                );
                Ok(product_id)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(error = %rollback_error, "Rollback of product aggregate failed");
                }
                Err(map_sqlx_error("product", error))
            }
        }
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query(
            "SELECT id, owner_id, name, per_hour, description FROM products WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("product", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let photos: Vec<String> = sqlx::query_scalar(
            "SELECT photo FROM product_photos WHERE product_id = ? ORDER BY created_at, id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("product photo", e))?;

        Self::row_to_product(&row, photos).map(Some)
    }

    async fn list(
        &self,
        search: Option<&str>,
        pagination: Pagination,
    ) -> Result<Vec<Product>, DomainError> {
        let pattern = like_pattern(search);

        let query = r#"
            SELECT p.id, p.owner_id, p.name, p.per_hour, p.description,
                   (SELECT ph.photo FROM product_photos ph
                    WHERE ph.product_id = p.id
                    ORDER BY ph.created_at, ph.id
                    LIMIT 1) AS main_photo
            FROM products p
            WHERE (? IS NULL OR p.name LIKE ? ESCAPE '\')
            ORDER BY p.id
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(pattern.as_deref())
            .bind(pattern.as_deref())
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("product", e))?;

        rows.iter()
            .map(|row| {
                let main_photo: Option<String> = row
                    .try_get("main_photo")
                    .map_err(|e| column_error("main_photo", e))?;
                Self::row_to_product(row, main_photo.into_iter().collect())
            })
            .collect()
    }

    async fn count(&self, search: Option<&str>) -> Result<u64, DomainError> {
        let pattern = like_pattern(search);

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM products p WHERE (? IS NULL OR p.name LIKE ? ESCAPE '\')"#,
        )
        .bind(pattern.as_deref())
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("product", e))?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern(Some("drill")), Some("%drill%".to_string()));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(
            like_pattern(Some("50%_off\\")),
            Some("%50\\%\\_off\\\\%".to_string())
        );
    }

    #[test]
    fn test_blank_search_means_no_filter() {
        assert_eq!(like_pattern(None), None);
        assert_eq!(like_pattern(Some("   ")), None);
    }
}
