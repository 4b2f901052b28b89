pub mod quiz_repository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
pub use quiz_repository::{MemoryQuizRepository, QuizRepository};
