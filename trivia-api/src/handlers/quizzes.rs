use axum::{extract::State, Json};
use trivia_core::{select_question, QuestionStore, QuizCategory, QuizSession};

use crate::{
    dto::*,
    error::ApiResult,
    extract::JsonBody,
    AppState,
};

pub async fn next_question(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<QuizRequest>,
) -> ApiResult<Json<QuizResponse>> {
    let session = QuizSession::try_from(payload)?;

    let candidates = match session.quiz_category {
        QuizCategory::All => state.store.list_questions().await?,
        QuizCategory::Category(id) => state.store.questions_in_category(id).await?,
    };

    let outcome = select_question(
        &candidates,
        &session.previous_questions,
        &mut rand::thread_rng(),
    )?;

    tracing::debug!(
        pool = candidates.len(),
        served = session.previous_questions.len(),
        exhausted = outcome.is_exhausted(),
        "Quiz round"
    );

    Ok(Json(QuizResponse {
        success: true,
        question: outcome.into_question().map(QuestionResponse::from),
    }))
}
