use serde::{Deserialize, Serialize};
use trivia_core::{CategoryId, QuestionId, QuizCategory, QuizSession, ALL_CATEGORIES};

use super::question::QuestionResponse;
use crate::error::ApiError;

/// Category id as sent by clients, which post it either as a number or as
/// a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategoryPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: CategoryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategoryPayload,
}

impl TryFrom<QuizRequest> for QuizSession {
    type Error = ApiError;

    /// Only an exact `"All"` label widens the pool; any other label is
    /// scoped to `id`, which must then be an integer.
    fn try_from(request: QuizRequest) -> Result<Self, Self::Error> {
        let QuizCategoryPayload { kind, id } = request.quiz_category;

        let category = if kind == ALL_CATEGORIES {
            QuizCategory::All
        } else {
            let id = match id {
                CategoryRef::Id(id) => CategoryId(id),
                CategoryRef::Text(text) => text.parse::<CategoryId>().map_err(|_| {
                    ApiError::BadRequest(format!("quiz_category.id is not an integer: {:?}", text))
                })?,
            };
            QuizCategory::Category(id)
        };

        Ok(QuizSession::new(request.previous_questions, category))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionResponse>,
}
