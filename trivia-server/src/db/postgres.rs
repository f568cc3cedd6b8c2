//! Postgres-backed question store
//!
//! - reads: single query each, ordered by id
//! - insert/delete: explicit transaction, rolled back on any error

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{QuestionStore, StoreError};
use crate::models::{Category, NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question store over a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories: Vec<Category> =
            sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let questions: Vec<Question> =
            sqlx::query_as(&format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(questions)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let question: Option<Question> =
            sqlx::query_as(&format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(question)
    }

    async fn find_by_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let questions: Vec<Question> = sqlx::query_as(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        // strpos instead of ILIKE so '%' and '_' in the term stay literal
        let questions: Vec<Question> = sqlx::query_as(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE strpos(lower(question), lower($1)) > 0
            ORDER BY id
            "#
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_excluding(
        &self,
        excluded: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        let questions: Vec<Question> = sqlx::query_as(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE NOT (id = ANY($1))
            AND ($2::INTEGER IS NULL OR category = $2)
            ORDER BY id
            "#
        ))
        .bind(excluded)
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut tx = self.pool.begin().await?;

        let stored: Question = sqlx::query_as(&format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {QUESTION_COLUMNS}
            "#
        ))
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = stored.id, category = stored.category, "question inserted");
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // tx dropped here -> rollback
            return Err(StoreError::question_not_found(id));
        }

        tx.commit().await?;
        tracing::debug!(id, "question deleted");
        Ok(())
    }
}
