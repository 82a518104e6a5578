//! Process-local trivia store.
//!
//! Mirrors the PostgreSQL store's observable behaviour: id-ascending
//! ordering, case-insensitive search on question text, store-assigned ids
//! and a foreign-key check on the question category.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use trivia_core::{
    Category, CategoryId, CategoryStore, CoreError, NewQuestion, Question, QuestionId,
    QuestionStore, Result,
};

/// The category set shipped with the database seed migration.
pub fn standard_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_question_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl MemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding [`standard_categories`] and no questions.
    pub fn with_standard_categories() -> Self {
        Self::new().with_categories(standard_categories())
    }

    pub fn with_categories(self, categories: impl IntoIterator<Item = Category>) -> Self {
        {
            let mut tables = self.tables.write();
            for category in categories {
                tables.categories.insert(category.id, category);
            }
        }
        self
    }

    /// Insert a question under a fixed id, bypassing id assignment.
    ///
    /// Later inserts continue after the highest id seen.
    pub fn with_question(self, question: Question) -> Self {
        {
            let mut tables = self.tables.write();
            tables.last_question_id = tables.last_question_id.max(question.id.as_i64());
            tables.questions.insert(question.id, question);
        }
        self
    }

    pub fn question_count(&self) -> usize {
        self.tables.read().questions.len()
    }
}

#[async_trait]
impl CategoryStore for MemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.tables.read().categories.values().cloned().collect())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.tables.read().categories.get(&id).cloned())
    }
}

#[async_trait]
impl QuestionStore for MemoryTriviaStore {
    async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.tables.read().questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        Ok(self
            .tables
            .read()
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(self.tables.read().questions.get(&id).cloned())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        Ok(self
            .tables
            .read()
            .questions
            .values()
            .filter(|q| q.matches(term))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question> {
        let mut tables = self.tables.write();

        if !tables.categories.contains_key(&question.category) {
            tracing::warn!(category = %question.category, "Rejected insert for unknown category");
            return Err(CoreError::Database(format!(
                "category {} does not exist",
                question.category
            )));
        }

        tables.last_question_id += 1;
        let stored = question.clone().into_question(QuestionId(tables.last_question_id));
        tables.questions.insert(stored.id, stored.clone());

        tracing::debug!(id = %stored.id, "Question inserted");
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool> {
        let removed = self.tables.write().questions.remove(&id).is_some();
        tracing::debug!(%id, removed, "Question delete executed");
        Ok(removed)
    }
}
