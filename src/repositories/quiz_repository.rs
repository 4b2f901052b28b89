use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

/// Storage seam for the quiz-management collaborator. The surrounding
/// platform owns real persistence; the share core only needs these calls.
#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    fn find_by_code(&self, code: &str) -> AppResult<Option<Quiz>>;
    fn list_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Quiz>>;
    fn update(&self, quiz: Quiz) -> AppResult<Quiz>;
}

/// In-process store keyed by quiz code.
pub struct MemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

impl MemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryQuizRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizRepository for MemoryQuizRepository {
    fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().unwrap_or_else(PoisonError::into_inner);
        if quizzes.contains_key(&quiz.quiz_code) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with code '{}' already exists",
                quiz.quiz_code
            )));
        }

        quizzes.insert(quiz.quiz_code.clone(), quiz.clone());
        Ok(quiz)
    }

    fn find_by_code(&self, code: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().unwrap_or_else(PoisonError::into_inner);
        Ok(quizzes.get(code).cloned())
    }

    fn list_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().unwrap_or_else(PoisonError::into_inner);
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| q.instructor_id.as_deref() == Some(instructor_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().unwrap_or_else(PoisonError::into_inner);
        if !quizzes.contains_key(&quiz.quiz_code) {
            return Err(AppError::NotFound(format!(
                "Quiz with code '{}' not found",
                quiz.quiz_code
            )));
        }

        quizzes.insert(quiz.quiz_code.clone(), quiz.clone());
        Ok(quiz)
    }
}
