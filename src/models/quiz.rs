use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::mcq::McqRecord;

/// Question index (as a string) to correct option letter.
pub type CorrectAnswers = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quiz {
    pub quiz_id: String,
    pub correct_answers: Json<CorrectAnswers>,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn from_questions(questions: &[McqRecord]) -> Self {
        let correct_answers = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| (idx.to_string(), q.correct_letter.clone()))
            .collect();
        Self {
            quiz_id: Uuid::new_v4().to_string(),
            correct_answers: Json(correct_answers),
            created_at: Utc::now(),
        }
    }

    pub fn is_older_than(&self, cutoff: DateTime<Utc>) -> bool {
        self.created_at < cutoff
    }
}
