//! Template persistence: parameterized SQL against the `templates` table.

use crate::error::AppError;
use crate::model::{Template, TemplatePayload};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, subject, body, created_at, updated_at";

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Template>, AppError>;
    async fn get(&self, id: i32) -> Result<Option<Template>, AppError>;
    async fn insert(&self, payload: &TemplatePayload) -> Result<Template, AppError>;
    /// Full update. Returns false when no row matched.
    async fn update(&self, id: i32, payload: &TemplatePayload) -> Result<bool, AppError>;
    /// Returns false when no row matched.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

pub struct PgTemplateRepository {
    pool: PgPool,
}

impl PgTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for PgTemplateRepository {
    async fn list(&self) -> Result<Vec<Template>, AppError> {
        let sql = format!("SELECT {} FROM templates ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Template>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Template>, AppError> {
        let sql = format!("SELECT {} FROM templates WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Template>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, payload: &TemplatePayload) -> Result<Template, AppError> {
        let sql = format!(
            "INSERT INTO templates (name, subject, body) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Template>(&sql)
            .bind(&payload.name)
            .bind(&payload.subject)
            .bind(&payload.body)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, payload: &TemplatePayload) -> Result<bool, AppError> {
        let sql =
            "UPDATE templates SET name = $2, subject = $3, body = $4, updated_at = NOW() WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.subject)
            .bind(&payload.body)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM templates WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
