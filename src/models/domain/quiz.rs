use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::{Difficulty, Question};

/// A complete quiz as exchanged with the share codec. Field names serialize
/// in camelCase, the wire shape the rest of the platform speaks.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    /// Owning instructor; the only field allowed to be absent at encode
    /// time. Import reassigns it to whoever redeemed the share code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
    pub topic: String,
    pub difficulty: Difficulty,
    pub timer_minutes: u32,
    /// Order defines question numbering.
    pub questions: Vec<Question>,
    /// Six-character code students type to join.
    pub quiz_code: String,
    pub created_at: DateTime<Utc>,
    pub total_marks: f64,
    pub is_archived: bool,
}

impl Quiz {
    pub fn new(
        instructor_id: &str,
        topic: &str,
        difficulty: Difficulty,
        timer_minutes: u32,
        questions: Vec<Question>,
        total_marks: f64,
        quiz_code: String,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            instructor_id: Some(instructor_id.to_string()),
            topic: topic.to_string(),
            difficulty,
            timer_minutes,
            questions,
            quiz_code,
            created_at: Utc::now(),
            total_marks,
            is_archived: false,
        }
    }
}
