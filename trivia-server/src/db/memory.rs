//! In-memory question store
//!
//! Same contract as the Postgres store, kept in a `BTreeMap` so iteration
//! order matches `ORDER BY id`. Ids are never reused after a delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{QuestionStore, StoreError};
use crate::models::{category, Category, NewQuestion, Question};

#[derive(Debug)]
struct Inner {
    categories: Vec<Category>,
    questions: BTreeMap<i32, Question>,
    next_id: i32,
}

/// In-memory question store
#[derive(Debug)]
pub struct MemoryQuestionStore {
    inner: RwLock<Inner>,
}

impl MemoryQuestionStore {
    /// Store with the canonical categories and no questions.
    pub fn new() -> Self {
        Self::with_categories(category::seed())
    }

    /// Store with the given categories and no questions.
    pub fn with_categories(mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.id);
        Self {
            inner: RwLock::new(Inner {
                categories,
                questions: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store with the canonical categories and `questions` assigned ids
    /// 1, 2, 3, ... in iteration order.
    pub fn seeded(questions: impl IntoIterator<Item = NewQuestion>) -> Self {
        let mut store = Self::new();
        let inner = store.inner.get_mut();
        for question in questions {
            inner.push(question);
        }
        store
    }
}

impl Default for MemoryQuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn push(&mut self, question: NewQuestion) -> Question {
        let stored = question.with_id(self.next_id);
        self.next_id += 1;
        self.questions.insert(stored.id, stored.clone());
        stored
    }

    fn filtered(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.questions.values().filter(|q| keep(q)).cloned().collect()
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.inner.read().await.categories.clone())
    }

    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.inner.read().await.filtered(|_| true))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, StoreError> {
        Ok(self.inner.read().await.questions.get(&id).cloned())
    }

    async fn find_by_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        Ok(self.inner.read().await.filtered(|q| q.category == category))
    }

    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .inner
            .read()
            .await
            .filtered(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn find_excluding(
        &self,
        excluded: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self.inner.read().await.filtered(|q| {
            !excluded.contains(&q.id) && category.map_or(true, |c| q.category == c)
        }))
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        Ok(self.inner.write().await.push(question))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::question_not_found(id))
    }
}
