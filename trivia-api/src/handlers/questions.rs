use axum::{extract::State, Json};
use trivia_core::{paginate, CategoryStore, NewQuestion, QuestionId, QuestionStore};
use validator::Validate;

use crate::{
    dto::*,
    error::{ApiError, ApiResult},
    extract::{IdPath, JsonBody, PageNumber},
    AppState,
};

pub async fn list(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
) -> ApiResult<Json<QuestionPageResponse>> {
    let questions = state.store.list_questions().await?;
    let selected = paginate(&questions, page, state.settings.questions_per_page);

    if selected.is_empty() {
        return Err(ApiError::NotFound(format!("no questions on page {}", page)));
    }

    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: selected.iter().map(QuestionResponse::from).collect(),
        total_questions: questions.len(),
        categories: Some(category_labels(&categories)),
        current_category: None,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateQuestionRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    payload.validate()?;

    let question = NewQuestion::from(payload);
    let stored = state
        .store
        .insert_question(&question)
        .await
        .map_err(|err| ApiError::Internal(format!("insert failed: {}", err)))?;

    tracing::info!(id = %stored.id, category = %stored.category, "Question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: stored.id,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath<QuestionId>,
) -> ApiResult<Json<DeletedResponse>> {
    let existing = state
        .store
        .find_question(id)
        .await
        .map_err(|err| ApiError::Unprocessable(format!("lookup failed: {}", err)))?;

    if existing.is_none() {
        return Err(ApiError::NotFound(format!("question {} does not exist", id)));
    }

    match state.store.delete_question(id).await {
        Ok(true) => {
            tracing::info!(%id, "Question deleted");
            Ok(Json(DeletedResponse {
                success: true,
                deleted: id,
            }))
        }
        Ok(false) => Err(ApiError::Unprocessable(format!(
            "question {} vanished before it could be deleted",
            id
        ))),
        Err(err) => Err(ApiError::Unprocessable(format!("delete failed: {}", err))),
    }
}

pub async fn search(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
    JsonBody(payload): JsonBody<SearchQuestionsRequest>,
) -> ApiResult<Json<QuestionPageResponse>> {
    let questions = state.store.search_questions(&payload.search_term).await?;
    let selected = paginate(&questions, page, state.settings.questions_per_page);

    tracing::debug!(term = %payload.search_term, matches = questions.len(), "Question search");

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: selected.iter().map(QuestionResponse::from).collect(),
        total_questions: questions.len(),
        categories: None,
        current_category: None,
    }))
}
