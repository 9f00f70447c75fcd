use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::prompts,
    errors::{GenerationError, GenerationResult, SchemaViolation},
    models::{
        domain::{
            quiz_question::{QUIZ_OPTION_COUNT, QUIZ_QUESTION_COUNT},
            Difficulty, QuizQuestion,
        },
        dto::request::Language,
    },
    services::model_service::CompletionProvider,
};

/// Stateless generators for study summaries and quizzes. Each call is an
/// independent single-shot exchange with the provider; the only shared state
/// is the provider handle itself.
pub struct GenerationService {
    provider: Arc<dyn CompletionProvider>,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// One completion request, provider text returned verbatim. The caller
    /// is responsible for subject trimming and length bounds.
    pub async fn generate_summary(
        &self,
        subject: &str,
        difficulty: Difficulty,
        language: Language,
    ) -> GenerationResult<String> {
        let (system, user) = build_summary_instructions(subject, difficulty, language);
        self.provider.complete(&system, &user).await
    }

    /// One completion request followed by extraction, parsing and shape
    /// validation. Any violation discards the whole batch; there is no
    /// partial-result path.
    pub async fn generate_quiz(
        &self,
        subject: &str,
        language: Language,
    ) -> GenerationResult<Vec<QuizQuestion>> {
        let (system, user) = build_quiz_instructions(subject, language);
        let raw = self.provider.complete(&system, &user).await?;
        parse_quiz_response(&raw)
    }
}

/// Instruction pair for the summary path. The difficulty tier is embedded in
/// the user instruction; the system instruction describes all tiers.
pub fn build_summary_instructions(
    subject: &str,
    difficulty: Difficulty,
    language: Language,
) -> (String, String) {
    let mut user = format!("Create a {} level study summary for: {}", difficulty, subject);
    if language == Language::Bg {
        user.push_str(" IMPORTANT: Write the entire summary in Bulgarian.");
    }

    (prompts::SUMMARY_SYSTEM_PROMPT.to_string(), user)
}

/// Instruction pair for the quiz path.
pub fn build_quiz_instructions(subject: &str, language: Language) -> (String, String) {
    let language_instruction = match language {
        Language::En => prompts::QUIZ_LANGUAGE_INSTRUCTION_EN,
        Language::Bg => prompts::QUIZ_LANGUAGE_INSTRUCTION_BG,
    };

    let system = prompts::QUIZ_SYSTEM_PROMPT_TEMPLATE
        .replace("{language_instruction}", language_instruction);
    let user = format!(
        "Generate {} quiz questions about: {}",
        QUIZ_QUESTION_COUNT, subject
    );

    (system, user)
}

/// Locate the JSON object inside a completion that may be wrapped in Markdown
/// code fences (with or without a language tag) or surrounded by prose. The
/// provider is known to do this despite instructions, so scanning for the
/// outermost braces is more robust than stripping literal fence markers.
pub fn extract_json_payload(raw: &str) -> GenerationResult<&str> {
    let start = raw
        .find('{')
        .ok_or_else(|| GenerationError::Decode("no JSON object found in completion".to_string()))?;
    let end = raw
        .rfind('}')
        .filter(|&end| end >= start)
        .ok_or_else(|| GenerationError::Decode("unterminated JSON object in completion".to_string()))?;

    Ok(&raw[start..=end])
}

/// Shape check for the `questions` value, independent of deserialization so
/// it can be exercised against hand-built JSON values. Reports the first
/// offending question index.
pub fn validate_quiz_questions(questions: &Value) -> Result<(), SchemaViolation> {
    let Some(items) = questions.as_array() else {
        return Err(SchemaViolation::NotAnArray);
    };

    if items.len() != QUIZ_QUESTION_COUNT {
        return Err(SchemaViolation::QuestionCount {
            expected: QUIZ_QUESTION_COUNT,
            actual: items.len(),
        });
    }

    for (index, item) in items.iter().enumerate() {
        let Some(question) = item.as_object() else {
            return Err(SchemaViolation::NotAnObject { index });
        };

        for field in ["question", "options", "correct", "explanation"] {
            if !question.contains_key(field) {
                return Err(SchemaViolation::MissingField { index, field });
            }
        }

        let Some(options) = question["options"].as_array() else {
            return Err(SchemaViolation::OptionsNotAnArray { index });
        };
        if options.len() != QUIZ_OPTION_COUNT {
            return Err(SchemaViolation::OptionCount {
                index,
                expected: QUIZ_OPTION_COUNT,
                actual: options.len(),
            });
        }

        let correct = question["correct"].as_i64();
        if !matches!(correct, Some(i) if (0..QUIZ_OPTION_COUNT as i64).contains(&i)) {
            return Err(SchemaViolation::CorrectIndex { index });
        }
    }

    Ok(())
}

/// Full response pipeline: extract, parse, validate, deserialize.
pub fn parse_quiz_response(raw: &str) -> GenerationResult<Vec<QuizQuestion>> {
    let payload = extract_json_payload(raw)?;

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| GenerationError::Decode(e.to_string()))?;

    // A missing `questions` field is treated as an empty batch, which then
    // fails the count check rather than the decode step.
    let questions = value
        .get("questions")
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));

    validate_quiz_questions(&questions)?;

    serde_json::from_value(questions).map_err(|e| GenerationError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockCompletionProvider;
    use serde_json::json;

    fn valid_question(n: usize) -> Value {
        json!({
            "question": format!("Question {}?", n),
            "options": ["A", "B", "C", "D"],
            "correct": n % 4,
            "explanation": "Because."
        })
    }

    fn valid_payload() -> Value {
        json!({ "questions": (0..5).map(valid_question).collect::<Vec<_>>() })
    }

    // --- request builders ---

    #[test]
    fn summary_instructions_embed_tier_and_subject() {
        let (system, user) =
            build_summary_instructions("Rust lifetimes", Difficulty::Advanced, Language::En);

        assert!(system.contains("educational assistant"));
        assert!(user.contains("advanced"));
        assert!(user.contains("Rust lifetimes"));
        assert!(!user.contains("Bulgarian"));
    }

    #[test]
    fn summary_instructions_add_bulgarian_hint() {
        let (_, user) =
            build_summary_instructions("Photosynthesis", Difficulty::Simple, Language::Bg);
        assert!(user.contains("Bulgarian"));
    }

    #[test]
    fn quiz_instructions_select_language_block() {
        let (system_en, user) = build_quiz_instructions("Photosynthesis", Language::En);
        assert!(system_en.contains("All content should be in English."));
        assert!(!system_en.contains("{language_instruction}"));
        assert!(user.contains("Photosynthesis"));

        let (system_bg, _) = build_quiz_instructions("Photosynthesis", Language::Bg);
        assert!(system_bg.contains("Bulgarian"));
    }

    // --- payload extraction ---

    #[test]
    fn extract_passes_bare_json_through() {
        let raw = r#"{"questions": []}"#;
        assert_eq!(extract_json_payload(raw).unwrap(), raw);
    }

    #[test]
    fn extract_strips_fence_with_language_tag() {
        let raw = "```json\n{\"questions\": []}\n```";
        assert_eq!(extract_json_payload(raw).unwrap(), "{\"questions\": []}");
    }

    #[test]
    fn extract_strips_fence_without_language_tag() {
        let raw = "```\n{\"questions\": []}\n```";
        assert_eq!(extract_json_payload(raw).unwrap(), "{\"questions\": []}");
    }

    #[test]
    fn extract_tolerates_leading_prose() {
        let raw = "Here is your quiz:\n{\"questions\": []}\nEnjoy!";
        assert_eq!(extract_json_payload(raw).unwrap(), "{\"questions\": []}");
    }

    #[test]
    fn extract_rejects_text_without_object() {
        let err = extract_json_payload("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, GenerationError::Decode(_)));
    }

    // --- schema validation ---

    #[test]
    fn validate_accepts_minimal_valid_payload() {
        assert!(validate_quiz_questions(&valid_payload()["questions"]).is_ok());
    }

    #[test]
    fn validate_rejects_four_questions() {
        let questions = json!((0..4).map(valid_question).collect::<Vec<_>>());
        assert_eq!(
            validate_quiz_questions(&questions).unwrap_err(),
            SchemaViolation::QuestionCount {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn validate_rejects_non_array_questions() {
        assert_eq!(
            validate_quiz_questions(&json!("not an array")).unwrap_err(),
            SchemaViolation::NotAnArray
        );
    }

    #[test]
    fn validate_rejects_wrong_option_counts() {
        for options in [json!(["a", "b", "c"]), json!(["a", "b", "c", "d", "e"])] {
            let mut payload = valid_payload();
            payload["questions"][2]["options"] = options.clone();
            let err = validate_quiz_questions(&payload["questions"]).unwrap_err();
            assert_eq!(
                err,
                SchemaViolation::OptionCount {
                    index: 2,
                    expected: 4,
                    actual: options.as_array().unwrap().len()
                }
            );
        }
    }

    #[test]
    fn validate_rejects_out_of_range_correct_index() {
        for correct in [json!(4), json!(-1), json!(1.5), json!("2")] {
            let mut payload = valid_payload();
            payload["questions"][1]["correct"] = correct;
            assert_eq!(
                validate_quiz_questions(&payload["questions"]).unwrap_err(),
                SchemaViolation::CorrectIndex { index: 1 }
            );
        }
    }

    #[test]
    fn validate_rejects_missing_field_with_index() {
        let mut payload = valid_payload();
        payload["questions"][3]
            .as_object_mut()
            .unwrap()
            .remove("explanation");

        assert_eq!(
            validate_quiz_questions(&payload["questions"]).unwrap_err(),
            SchemaViolation::MissingField {
                index: 3,
                field: "explanation"
            }
        );
    }

    // --- full response pipeline ---

    #[test]
    fn parse_accepts_fenced_payload_identically_to_bare() {
        let bare = valid_payload().to_string();
        let fenced = format!("```json\n{}\n```", bare);

        let from_bare = parse_quiz_response(&bare).unwrap();
        let from_fenced = parse_quiz_response(&fenced).unwrap();

        assert_eq!(from_bare, from_fenced);
        assert_eq!(from_bare.len(), 5);
        assert_eq!(from_bare[0].options.len(), 4);
    }

    #[test]
    fn parse_preserves_question_content_verbatim() {
        let questions = parse_quiz_response(&valid_payload().to_string()).unwrap();
        assert_eq!(questions[0].question, "Question 0?");
        assert_eq!(questions[4].correct, 4 % 4);
        assert_eq!(questions[2].explanation, "Because.");
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_quiz_response(r#"{"questions": [}"#).unwrap_err();
        assert!(matches!(err, GenerationError::Decode(_)));
    }

    #[test]
    fn parse_treats_missing_questions_field_as_empty() {
        let err = parse_quiz_response(r#"{"foo": 1}"#).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Schema(SchemaViolation::QuestionCount {
                expected: 5,
                actual: 0
            })
        );
    }

    // --- service against a mocked provider ---

    #[tokio::test]
    async fn generate_summary_returns_provider_text_verbatim() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .withf(|_, user| user.contains("normal") && user.contains("Ohm's law"))
            .returning(|_, _| Ok("## Ohm's Law\n\nV = IR".to_string()));

        let service = GenerationService::new(Arc::new(provider));
        let summary = service
            .generate_summary("Ohm's law", Difficulty::Normal, Language::En)
            .await
            .unwrap();

        assert_eq!(summary, "## Ohm's Law\n\nV = IR");
    }

    #[tokio::test]
    async fn generate_summary_propagates_provider_failure() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Err(GenerationError::Provider("connection refused".to_string())));

        let service = GenerationService::new(Arc::new(provider));
        let err = service
            .generate_summary("Ohm's law", Difficulty::Simple, Language::En)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Provider(_)));
    }

    #[tokio::test]
    async fn generate_quiz_parses_fenced_completion() {
        let payload = valid_payload().to_string();
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(move |_, _| Ok(format!("```json\n{}\n```", payload)));

        let service = GenerationService::new(Arc::new(provider));
        let questions = service
            .generate_quiz("Photosynthesis", Language::En)
            .await
            .unwrap();

        // Shape only; content is model-dependent and never asserted across calls.
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert!(questions.iter().all(|q| (q.correct as usize) < 4));
    }

    #[tokio::test]
    async fn generate_quiz_rejects_garbage_completion() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Ok("I'm sorry, I can't produce JSON today.".to_string()));

        let service = GenerationService::new(Arc::new(provider));
        let err = service
            .generate_quiz("Photosynthesis", Language::En)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Decode(_)));
    }

    #[tokio::test]
    async fn generate_quiz_discards_batch_on_schema_violation() {
        let mut payload = valid_payload();
        payload["questions"][4]["correct"] = json!(7);
        let body = payload.to_string();

        let mut provider = MockCompletionProvider::new();
        provider.expect_complete().returning(move |_, _| Ok(body.clone()));

        let service = GenerationService::new(Arc::new(provider));
        let err = service
            .generate_quiz("Photosynthesis", Language::En)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Schema(SchemaViolation::CorrectIndex { index: 4 })
        );
    }
}
