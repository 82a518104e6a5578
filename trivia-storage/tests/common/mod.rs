#![allow(dead_code)]

use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use trivia_core::{CategoryId, NewQuestion};

/// Generate a random valid question for the given category
pub fn create_test_question(category: i64) -> NewQuestion {
    NewQuestion {
        question: Sentence(3..8).fake::<String>(),
        answer: Word().fake::<String>(),
        category: CategoryId(category),
        difficulty: (1..=5).fake(),
    }
}

/// A question with fixed text, for search assertions
pub fn create_named_question(text: &str, answer: &str, category: i64) -> NewQuestion {
    NewQuestion::new(text, answer, category, 2)
}
