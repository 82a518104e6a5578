use super::ids::{CategoryId, QuestionId};

/// Label the client sends to play across every category.
pub const ALL_CATEGORIES: &str = "All";

/// The pool a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(CategoryId),
}

/// Client-held state of one quiz game, resubmitted on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategory,
}

impl QuizSession {
    pub fn new(previous_questions: Vec<QuestionId>, quiz_category: QuizCategory) -> Self {
        Self {
            previous_questions,
            quiz_category,
        }
    }
}
