//! Customer persistence: parameterized SQL against the `customers` table.

use crate::error::AppError;
use crate::model::{Customer, CustomerPayload};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, created_at, updated_at";

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, AppError>;
    async fn get(&self, id: i32) -> Result<Option<Customer>, AppError>;
    /// Insert one row; the id comes back via `RETURNING`.
    async fn insert(&self, payload: &CustomerPayload) -> Result<Customer, AppError>;
    /// Full update. Returns false when no row matched.
    async fn update(&self, id: i32, payload: &CustomerPayload) -> Result<bool, AppError>;
    /// Returns false when no row matched.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let sql = format!("SELECT {} FROM customers ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {} FROM customers WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, payload: &CustomerPayload) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&payload.name)
            .bind(&payload.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, payload: &CustomerPayload) -> Result<bool, AppError> {
        let sql = "UPDATE customers SET name = $2, email = $3, updated_at = NOW() WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.email)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM customers WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
