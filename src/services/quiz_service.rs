use std::sync::Arc;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use validator::Validate;

use crate::{
    constants::{QUIZ_CODE_ALPHABET, QUIZ_CODE_LENGTH},
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::CreateQuizRequest},
    repositories::QuizRepository,
    services::ShareCodeService,
};

static QUIZ_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[A-Z0-9]{{{QUIZ_CODE_LENGTH}}}$"))
        .expect("QUIZ_CODE_REGEX is a valid regex pattern")
});

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Creates a quiz with a fresh join code, owned by the given instructor.
    pub fn create_quiz(&self, instructor_id: &str, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let quiz = Quiz::new(
            instructor_id,
            &request.topic,
            request.difficulty,
            request.timer_minutes,
            request.questions,
            request.total_marks,
            generate_quiz_code(),
        );
        let quiz = self.repository.create(quiz)?;
        log::info!("created quiz '{}' with code {}", quiz.topic, quiz.quiz_code);
        Ok(quiz)
    }

    pub fn get_quiz_by_code(&self, code: &str) -> AppResult<Quiz> {
        if !QUIZ_CODE_REGEX.is_match(code) {
            return Err(AppError::ValidationError(format!(
                "'{code}' is not a valid quiz code"
            )));
        }

        self.repository
            .find_by_code(code)?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with code '{code}' not found")))
    }

    pub fn list_quizzes_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Quiz>> {
        self.repository.list_by_instructor(instructor_id)
    }

    /// Share token for an existing quiz.
    pub fn share_quiz(&self, code: &str) -> AppResult<String> {
        let quiz = self.get_quiz_by_code(code)?;
        ShareCodeService::encode(&quiz)
    }

    /// Rebuilds a quiz from a share token as a brand-new record owned by the
    /// importing instructor. Decoded id, code, and timestamp are discarded.
    pub fn import_quiz(&self, instructor_id: &str, token: &str) -> AppResult<Quiz> {
        let decoded = ShareCodeService::decode(token)?;
        log::info!(
            "importing shared quiz '{}' for instructor {}",
            decoded.topic,
            instructor_id
        );
        self.create_quiz(instructor_id, CreateQuizRequest::from(decoded))
    }

    pub fn set_archived(&self, code: &str, archived: bool) -> AppResult<Quiz> {
        let mut quiz = self.get_quiz_by_code(code)?;
        quiz.is_archived = archived;
        self.repository.update(quiz)
    }
}

/// Six characters from A-Z0-9, the code students type to join.
fn generate_quiz_code() -> String {
    let mut rng = rand::thread_rng();
    (0..QUIZ_CODE_LENGTH)
        .map(|_| {
            let index = rng.gen_range(0..QUIZ_CODE_ALPHABET.len());
            QUIZ_CODE_ALPHABET[index] as char
        })
        .collect()
}
