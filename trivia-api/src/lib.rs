//! HTTP surface of the trivia service.
//!
//! [`routes`] builds the axum router; every handler reaches persistence
//! through the [`TriviaStore`] held in [`AppState`].

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use trivia_core::{TriviaStore, QUESTIONS_PER_PAGE};

pub use dto::*;
pub use error::{ApiError, ApiResult};

/// Settings the endpoint layer needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub questions_per_page: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            questions_per_page: QUESTIONS_PER_PAGE,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
    pub settings: ApiSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>, settings: ApiSettings) -> Self {
        Self { store, settings }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handlers::categories::list))
        .route(
            "/categories/:category_id/questions",
            get(handlers::categories::questions),
        )
        .route(
            "/questions",
            get(handlers::questions::list).post(handlers::questions::create),
        )
        .route("/questions/search", post(handlers::questions::search))
        .route("/questions/:question_id", delete(handlers::questions::delete))
        .route("/quizzes", post(handlers::quizzes::next_question))
        .fallback(handlers::not_found)
        .layer(axum::middleware::map_response(middleware::json_error_envelope))
        .with_state(state)
}
