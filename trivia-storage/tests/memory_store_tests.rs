mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;
use trivia_core::{CategoryId, CategoryStore, CoreError, QuestionId, QuestionStore};
use trivia_storage::{standard_categories, MemoryTriviaStore};

use common::*;

async fn seeded_store() -> MemoryTriviaStore {
    let store = MemoryTriviaStore::with_standard_categories();
    store
        .insert_question(&create_named_question(
            "Which continent is Egypt in?",
            "Africa",
            3,
        ))
        .await
        .unwrap();
    store
        .insert_question(&create_named_question(
            "Who discovered penicillin?",
            "Alexander Fleming",
            1,
        ))
        .await
        .unwrap();
    store
        .insert_question(&create_named_question(
            "Which planet is known as the Red Planet?",
            "Mars",
            1,
        ))
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_categories_are_listed_by_id() {
    let store = MemoryTriviaStore::new().with_categories(standard_categories().into_iter().rev());

    let categories = store.list_categories().await.unwrap();
    let ids: Vec<i64> = categories.iter().map(|c| c.id.as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_find_category() {
    let store = MemoryTriviaStore::with_standard_categories();

    let history = store.find_category(CategoryId(4)).await.unwrap().unwrap();
    assert_eq!(history.kind, "History");
    assert!(store.find_category(CategoryId(1000)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let store = MemoryTriviaStore::with_standard_categories();

    let first = store.insert_question(&create_test_question(2)).await.unwrap();
    let second = store.insert_question(&create_test_question(2)).await.unwrap();

    assert_eq!(first.id, QuestionId(1));
    assert_eq!(second.id, QuestionId(2));
}

#[tokio::test]
async fn test_insert_then_fetch_round_trip() {
    let store = MemoryTriviaStore::with_standard_categories();
    let new = create_test_question(5);

    let stored = store.insert_question(&new).await.unwrap();
    let fetched = store.find_question(stored.id).await.unwrap().unwrap();

    assert_eq!(fetched.question, new.question);
    assert_eq!(fetched.answer, new.answer);
    assert_eq!(fetched.category, new.category);
    assert_eq!(fetched.difficulty, new.difficulty);
}

#[tokio::test]
async fn test_insert_rejects_unknown_category() {
    let store = MemoryTriviaStore::with_standard_categories();

    let result = store.insert_question(&create_test_question(99)).await;
    assert!(matches!(result, Err(CoreError::Database(_))));
    assert_eq!(store.question_count(), 0);
}

#[tokio::test]
async fn test_ids_continue_after_seeded_questions() {
    let seed = create_test_question(1).into_question(QuestionId(23));
    let store = MemoryTriviaStore::with_standard_categories().with_question(seed);

    let next = store.insert_question(&create_test_question(1)).await.unwrap();
    assert_eq!(next.id, QuestionId(24));
}

#[tokio::test]
async fn test_filter_by_category() {
    let store = seeded_store().await;

    let science = store.questions_in_category(CategoryId(1)).await.unwrap();
    assert_eq!(science.len(), 2);
    assert!(science.iter().all(|q| q.category == CategoryId(1)));
    assert!(science.windows(2).all(|w| w[0].id < w[1].id));

    assert!(store.questions_in_category(CategoryId(6)).await.unwrap().is_empty());
}

#[rstest]
#[case("WHICH", 2)]
#[case("which", 2)]
#[case("egypt", 1)]
#[case("Fleming", 0)]
#[case("hghjkl", 0)]
#[tokio::test]
async fn test_search_matches_question_text_only(#[case] term: &'static str, #[case] expected: usize) {
    let store = seeded_store().await;

    let found = store.search_questions(term).await.unwrap();
    assert_eq!(found.len(), expected);
}

#[tokio::test]
async fn test_delete_is_reported_once() {
    let store = seeded_store().await;

    assert!(store.delete_question(QuestionId(2)).await.unwrap());
    assert!(!store.delete_question(QuestionId(2)).await.unwrap());
    assert!(store.find_question(QuestionId(2)).await.unwrap().is_none());
    assert_eq!(store.list_questions().await.unwrap().len(), 2);
}
