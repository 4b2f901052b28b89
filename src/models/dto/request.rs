use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, Question, Quiz};

static ANSWER_LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]$").expect("ANSWER_LETTER_REGEX is a valid regex pattern"));

/// Payload for creating a quiz, whether authored fresh or rebuilt from a
/// decoded share token.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub difficulty: Difficulty,

    #[validate(range(min = 1, max = 60))]
    pub timer_minutes: u32,

    #[validate(length(min = 1), custom(function = validate_questions))]
    pub questions: Vec<Question>,

    pub total_marks: f64,
}

impl From<Quiz> for CreateQuizRequest {
    /// Decoded identity fields are hints only; content is what survives an
    /// import. Total marks are recomputed from the questions.
    fn from(quiz: Quiz) -> Self {
        let total_marks = quiz.questions.iter().map(|q| q.marks).sum();
        CreateQuizRequest {
            topic: quiz.topic,
            difficulty: quiz.difficulty,
            timer_minutes: quiz.timer_minutes,
            questions: quiz.questions,
            total_marks,
        }
    }
}

fn validate_questions(questions: &[Question]) -> Result<(), ValidationError> {
    for question in questions {
        if question.options.is_empty() {
            return Err(ValidationError::new("question_without_options"));
        }
        if !ANSWER_LETTER_REGEX.is_match(&question.answer) {
            return Err(ValidationError::new("answer_not_a_letter"));
        }
        match question.answer_index() {
            Some(index) if index < question.options.len() => {}
            _ => return Err(ValidationError::new("answer_outside_options")),
        }
    }
    Ok(())
}
