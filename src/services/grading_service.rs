use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use utoipa::ToSchema;

use crate::models::quiz::CorrectAnswers;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuestionResult {
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GradeReport {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub results: BTreeMap<String, QuestionResult>,
}

pub struct GradingService;

impl GradingService {
    /// Scores `submitted` against the stored key.
    ///
    /// Only keys present in `correct` count; extra submitted keys are ignored
    /// and missing or null answers are wrong.
    pub fn grade(
        correct: &CorrectAnswers,
        submitted: &HashMap<String, Option<String>>,
    ) -> GradeReport {
        let mut score = 0;
        let mut results = BTreeMap::new();

        for (idx, correct_letter) in correct {
            let user_answer = submitted.get(idx).cloned().flatten();
            let is_correct = user_answer.as_deref() == Some(correct_letter.as_str());
            if is_correct {
                score += 1;
            }
            results.insert(
                idx.clone(),
                QuestionResult {
                    user_answer,
                    correct_answer: correct_letter.clone(),
                    is_correct,
                },
            );
        }

        let total = correct.len();
        GradeReport {
            score,
            total,
            percentage: percentage(score, total),
            results,
        }
    }
}

fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = score as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
