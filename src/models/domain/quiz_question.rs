use serde::{Deserialize, Serialize};

/// Number of questions every generated quiz must contain.
pub const QUIZ_QUESTION_COUNT: usize = 5;
/// Number of options every question must carry.
pub const QUIZ_OPTION_COUNT: usize = 4;

/// A validated multiple-choice question as produced by the quiz generator.
/// Invariant: exactly [`QUIZ_OPTION_COUNT`] options and `correct` addresses
/// one of them. Enforced by the generation core before this type is built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: u8,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_question_round_trip_serialization() {
        let question = QuizQuestion {
            question: "What does ownership mean in Rust?".to_string(),
            options: vec![
                "Garbage collection".to_string(),
                "Compile-time memory management".to_string(),
                "Reference counting only".to_string(),
                "Manual free".to_string(),
            ],
            correct: 1,
            explanation: "Ownership is enforced at compile time.".to_string(),
        };

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: QuizQuestion = serde_json::from_str(&json).expect("question should deserialize");
        assert_eq!(question, parsed);
    }

    #[test]
    fn quiz_question_rejects_missing_fields() {
        let incomplete = r#"{"question": "Q?", "options": ["a", "b", "c", "d"]}"#;
        assert!(serde_json::from_str::<QuizQuestion>(incomplete).is_err());
    }
}
