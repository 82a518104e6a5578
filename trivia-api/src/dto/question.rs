use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trivia_core::{CategoryId, NewQuestion, Question, QuestionId};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[validate(range(min = 1))]
    pub category: i64,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(request: CreateQuestionRequest) -> Self {
        NewQuestion::new(
            request.question,
            request.answer,
            request.category,
            request.difficulty,
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self::from(question.clone())
    }
}

/// One page of questions plus the size of the full result set.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<CategoryId, String>>,
    pub current_category: Option<CategoryId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}
