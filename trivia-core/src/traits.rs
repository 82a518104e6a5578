use async_trait::async_trait;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::error::Result;

/// Read access to the category table. Categories are never mutated here.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, id ascending.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>>;
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, id ascending.
    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// Questions of one category, id ascending.
    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>>;

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Case-insensitive substring search on the question text, id ascending.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Insert a question; a failed insert leaves the store untouched.
    async fn insert_question(&self, question: &NewQuestion) -> Result<Question>;

    /// Remove a question. Returns `false` when no row matched.
    async fn delete_question(&self, id: QuestionId) -> Result<bool>;
}

/// Everything the HTTP layer needs from persistence.
pub trait TriviaStore: QuestionStore + CategoryStore {}

impl<T> TriviaStore for T where T: QuestionStore + CategoryStore {}
