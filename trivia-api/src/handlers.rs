pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("no route matches the request".to_string())
}
