//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;

use promptdeck::{DomainError, NewPrompt, Prompt, PromptRepository, RecordId};

/// PostgreSQL implementation of PromptRepository
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PromptRow {
    id: i64,
    title: String,
    body: String,
    use_case: String,
    tags: Vec<String>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PromptRow> for Prompt {
    fn from(row: PromptRow) -> Self {
        Self {
            id: RecordId::Confirmed(row.id),
            title: row.title,
            body: row.body,
            use_case: row.use_case,
            tags: row.tags,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn list_recent(&self) -> Result<Vec<Prompt>, DomainError> {
        let rows = sqlx::query_as::<_, PromptRow>(
            r#"
            SELECT id, title, body, use_case, tags, updated_at
            FROM prompts
            ORDER BY updated_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new: &NewPrompt) -> Result<Option<Prompt>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(
            r#"
            INSERT INTO prompts (title, body, use_case, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, use_case, tags, updated_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.body)
        .bind(&new.use_case)
        .bind(&new.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(Some(row.into()))
    }
}
