use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ids::{CategoryId, QuestionId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// A question that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct NewQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    pub category: CategoryId,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<CategoryId>,
        difficulty: i32,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            difficulty,
        }
    }

    /// Attach a store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl Question {
    /// Case-insensitive containment match against the question text only.
    pub fn matches(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}
