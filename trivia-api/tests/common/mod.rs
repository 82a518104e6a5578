#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use trivia_api::{routes, ApiSettings, AppState};
use trivia_core::{
    Category, CategoryId, CategoryStore, CoreError, NewQuestion, Question, QuestionId,
    QuestionStore, Result, TriviaStore,
};
use trivia_storage::MemoryTriviaStore;

const SEED: &[(i64, &str, &str, i64, i32)] = &[
    (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

pub const SEED_QUESTION_COUNT: usize = 19;

/// Memory store holding the standard categories and the sample questions
pub fn fixture_store() -> Arc<MemoryTriviaStore> {
    let store = SEED.iter().fold(
        MemoryTriviaStore::with_standard_categories(),
        |store, &(id, question, answer, category, difficulty)| {
            store.with_question(Question {
                id: QuestionId(id),
                question: question.to_string(),
                answer: answer.to_string(),
                category: CategoryId(category),
                difficulty,
            })
        },
    );
    Arc::new(store)
}

pub fn app_with_store(store: Arc<dyn TriviaStore>) -> Router {
    routes(AppState::new(store, ApiSettings::default()))
}

pub fn app() -> Router {
    app_with_store(fixture_store())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Drive one request through the router and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"], Value::from(expected.as_u16()));
    assert_eq!(body["message"], Value::from(message));
}

/// Store whose lookups succeed but whose every other call fails
pub struct BrokenStore;

fn broken<T>() -> Result<T> {
    Err(CoreError::Database("connection reset".to_string()))
}

#[async_trait]
impl CategoryStore for BrokenStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        broken()
    }

    async fn find_category(&self, _id: CategoryId) -> Result<Option<Category>> {
        broken()
    }
}

#[async_trait]
impl QuestionStore for BrokenStore {
    async fn list_questions(&self) -> Result<Vec<Question>> {
        broken()
    }

    async fn questions_in_category(&self, _category: CategoryId) -> Result<Vec<Question>> {
        broken()
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(Some(
            NewQuestion::new("What is 2 + 2?", "4", 1, 1).into_question(id),
        ))
    }

    async fn search_questions(&self, _term: &str) -> Result<Vec<Question>> {
        broken()
    }

    async fn insert_question(&self, _question: &NewQuestion) -> Result<Question> {
        broken()
    }

    async fn delete_question(&self, _id: QuestionId) -> Result<bool> {
        broken()
    }
}
