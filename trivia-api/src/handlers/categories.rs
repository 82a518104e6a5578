use axum::{extract::State, Json};
use trivia_core::{paginate, CategoryId, CategoryStore, QuestionStore};

use crate::{
    dto::*,
    error::{ApiError, ApiResult},
    extract::{IdPath, PageNumber},
    AppState,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
    let categories = state.store.list_categories().await.map_err(|err| {
        ApiError::Internal(format!("listing categories failed: {}", err))
    })?;

    Ok(Json(CategoriesResponse::new(categories)))
}

pub async fn questions(
    State(state): State<AppState>,
    IdPath(category_id): IdPath<CategoryId>,
    PageNumber(page): PageNumber,
) -> ApiResult<Json<QuestionPageResponse>> {
    let questions = state.store.questions_in_category(category_id).await?;
    let selected = paginate(&questions, page, state.settings.questions_per_page);

    if selected.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no questions on page {} of category {}",
            page, category_id
        )));
    }

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: selected.iter().map(QuestionResponse::from).collect(),
        total_questions: questions.len(),
        categories: None,
        current_category: Some(category_id),
    }))
}
