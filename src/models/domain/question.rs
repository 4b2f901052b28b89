use serde::{Deserialize, Serialize};

/// Difficulty labels assigned by the question generator. Quizzes that mix
/// levels are labelled `Mixed`; individual questions never are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Mixed,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    /// Question text shown to the student.
    pub question: String,
    /// Ordered option texts, each prefixed with its letter label ("A. ...").
    pub options: Vec<String>,
    /// Letter of the correct option, e.g. "B".
    pub answer: String,
    pub difficulty: Difficulty,
    /// Marks awarded for a correct answer; may be fractional.
    pub marks: f64,
}

impl Question {
    /// Zero-based index of the option named by the answer letter.
    pub fn answer_index(&self) -> Option<usize> {
        let mut chars = self.answer.chars();
        match (chars.next(), chars.next()) {
            (Some(letter @ 'A'..='Z'), None) => Some(letter as usize - 'A' as usize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_round_trip_serialization() {
        let variants = [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Mixed,
        ];

        for variant in variants {
            let json = serde_json::to_string(&variant).expect("variant should serialize");
            let parsed: Difficulty =
                serde_json::from_str(&json).expect("variant should deserialize");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn difficulty_rejects_unknown_variant() {
        let invalid = "\"Impossible\"";
        let parsed = serde_json::from_str::<Difficulty>(invalid);

        assert!(parsed.is_err());
    }

    #[test]
    fn question_rejects_unknown_fields() {
        let json = r#"{
            "question": "2 + 2?",
            "options": ["A. 3", "B. 4"],
            "answer": "B",
            "difficulty": "Easy",
            "marks": 1.0,
            "hint": "think even"
        }"#;

        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn answer_index_maps_letters_to_option_positions() {
        let mut question = Question {
            question: "2 + 2?".to_string(),
            options: vec![
                "A. 3".to_string(),
                "B. 4".to_string(),
                "C. 5".to_string(),
                "D. 22".to_string(),
            ],
            answer: "A".to_string(),
            difficulty: Difficulty::Easy,
            marks: 1.0,
        };
        assert_eq!(question.answer_index(), Some(0));

        question.answer = "D".to_string();
        assert_eq!(question.answer_index(), Some(3));

        question.answer = "b".to_string();
        assert_eq!(question.answer_index(), None);

        question.answer = "AB".to_string();
        assert_eq!(question.answer_index(), None);

        question.answer = String::new();
        assert_eq!(question.answer_index(), None);
    }
}
