use crate::models::domain::{Difficulty, Question, Quiz};
use crate::models::dto::CreateQuizRequest;

#[cfg(test)]
pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use super::*;

    /// The mitochondria quiz used across codec tests.
    pub fn cell_biology_quiz() -> Quiz {
        Quiz {
            id: "42".to_string(),
            instructor_id: Some("instructor-1".to_string()),
            topic: "Cell Biology".to_string(),
            difficulty: Difficulty::Mixed,
            timer_minutes: 10,
            questions: vec![Question {
                question: "What is the powerhouse of the cell?".to_string(),
                options: vec![
                    "A. Nucleus".to_string(),
                    "B. Mitochondria".to_string(),
                    "C. Ribosome".to_string(),
                    "D. Golgi".to_string(),
                ],
                answer: "B".to_string(),
                difficulty: Difficulty::Easy,
                marks: 20.0,
            }],
            quiz_code: "AB12CD".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            total_marks: 20.0,
            is_archived: false,
        }
    }

    /// A numbered three-option question; letter and difficulty cycle.
    pub fn question(index: usize) -> Question {
        let answer = match index % 3 {
            0 => "A",
            1 => "B",
            _ => "C",
        };
        let difficulty = match index % 3 {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        };

        Question {
            question: format!("Question {index}?"),
            options: vec![
                format!("A. Option {index}-A"),
                format!("B. Option {index}-B"),
                format!("C. Option {index}-C"),
            ],
            answer: answer.to_string(),
            difficulty,
            marks: 1.5,
        }
    }

    pub fn quiz_with_questions(count: usize) -> Quiz {
        let questions: Vec<Question> = (0..count).map(question).collect();
        Quiz {
            questions,
            total_marks: count as f64 * 1.5,
            ..cell_biology_quiz()
        }
    }

    pub fn create_request() -> CreateQuizRequest {
        CreateQuizRequest::from(cell_biology_quiz())
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::fixtures::*;

    #[test]
    fn test_fixtures_cell_biology_quiz() {
        let quiz = cell_biology_quiz();
        assert_eq!(quiz.quiz_code, "AB12CD");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].answer, "B");
    }

    #[test]
    fn test_fixtures_quiz_with_questions() {
        let quiz = quiz_with_questions(5);
        assert_eq!(quiz.questions.len(), 5);
        assert_eq!(quiz.total_marks, 7.5);
    }

    #[test]
    fn test_fixtures_create_request_is_valid() {
        assert!(create_request().validate().is_ok());
    }
}
