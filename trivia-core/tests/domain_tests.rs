use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use trivia_core::domain::*;
use validator::Validate;

// ===== ID Tests =====

#[test]
fn test_question_id_conversions() {
    let id = QuestionId::from(18);
    assert_eq!(id.as_i64(), 18);

    let raw: i64 = id.into();
    assert_eq!(raw, 18);
    assert_eq!(id.to_string(), "18");
}

#[test]
fn test_category_id_parses_from_string() {
    assert_eq!(" 4 ".parse::<CategoryId>().unwrap(), CategoryId(4));
    assert!("history".parse::<CategoryId>().is_err());
}

#[test]
fn test_ids_serialize_transparently() {
    assert_eq!(serde_json::to_value(QuestionId(5)).unwrap(), json!(5));
    assert_eq!(serde_json::to_value(CategoryId(2)).unwrap(), json!(2));
}

// ===== Category Tests =====

#[test]
fn test_category_serializes_label_as_type() {
    let category = Category::new(1, "Science");
    assert_eq!(
        serde_json::to_value(&category).unwrap(),
        json!({ "id": 1, "type": "Science" })
    );
}

#[test]
fn test_category_requires_label() {
    assert!(Category::new(1, "").validate().is_err());
    assert!(Category::new(1, "Art").validate().is_ok());
}

// ===== Question Tests =====

#[test]
fn test_new_question_validation() {
    let valid = NewQuestion::new("Which continent is Egypt in?", "Africa", 3, 2);
    assert!(valid.validate().is_ok());

    let empty_text = NewQuestion::new("", "Africa", 3, 2);
    assert!(empty_text.validate().is_err());

    let empty_answer = NewQuestion::new("Which continent?", "", 3, 2);
    assert!(empty_answer.validate().is_err());
}

#[test_case(0, false ; "below range")]
#[test_case(1, true ; "lowest")]
#[test_case(5, true ; "highest")]
#[test_case(6, false ; "above range")]
fn test_new_question_difficulty_range(difficulty: i32, valid: bool) {
    let question = NewQuestion::new("What is 2 + 2?", "4", 1, difficulty);
    assert_eq!(question.validate().is_ok(), valid);
}

#[test]
fn test_into_question_keeps_fields() {
    let new = NewQuestion::new("Who painted the Mona Lisa?", "Leonardo da Vinci", 2, 3);
    let stored = new.clone().into_question(QuestionId(42));

    assert_eq!(stored.id, QuestionId(42));
    assert_eq!(stored.question, new.question);
    assert_eq!(stored.answer, new.answer);
    assert_eq!(stored.category, new.category);
    assert_eq!(stored.difficulty, new.difficulty);
}

#[test]
fn test_question_match_is_case_insensitive_on_text_only() {
    let question = NewQuestion::new("Which continent is Egypt in?", "Africa", 3, 2)
        .into_question(QuestionId(1));

    assert!(question.matches("WHICH"));
    assert!(question.matches("egypt"));
    assert!(!question.matches("africa"));
}
