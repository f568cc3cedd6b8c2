//! Question store abstraction
//!
//! Handlers only see `dyn QuestionStore`; the Postgres store backs
//! production and the in-memory store backs tests and `--in-memory` runs.

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl StoreError {
    pub(crate) fn question_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "question",
            id: id.to_string(),
        }
    }
}

/// Read/write access to the `questions` and `categories` relations.
///
/// List operations return questions ordered by id.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// All categories ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// All questions.
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, StoreError>;

    async fn find_by_category(&self, category: i32) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// The empty term matches every question.
    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Questions whose id is not in `excluded`, optionally limited to one
    /// category.
    async fn find_excluding(
        &self,
        excluded: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError>;

    /// Persist a question and return it with its assigned id.
    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question, or `StoreError::NotFound` if no such id.
    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError>;
}
