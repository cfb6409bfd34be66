use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::quiz::Quiz;

/// Answer-key storage keyed by quiz id.
#[derive(Clone)]
pub enum QuizRepository {
    Postgres(PgPool),
    InMemory(Arc<RwLock<HashMap<String, Quiz>>>),
}

impl QuizRepository {
    pub fn postgres(pool: PgPool) -> Self {
        Self::Postgres(pool)
    }

    pub fn in_memory() -> Self {
        Self::InMemory(Arc::default())
    }

    pub async fn put(&self, quiz: &Quiz) -> Result<()> {
        match self {
            Self::Postgres(pool) => {
                sqlx::query(
                    r#"
                    INSERT INTO quizzes (quiz_id, correct_answers, created_at)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(&quiz.quiz_id)
                .bind(&quiz.correct_answers)
                .bind(quiz.created_at)
                .execute(pool)
                .await?;
            }
            Self::InMemory(store) => {
                store.write().await.insert(quiz.quiz_id.clone(), quiz.clone());
            }
        }
        Ok(())
    }

    pub async fn get(&self, quiz_id: &str) -> Result<Option<Quiz>> {
        match self {
            Self::Postgres(pool) => {
                let quiz = sqlx::query_as::<_, Quiz>(
                    r#"
                    SELECT quiz_id, correct_answers, created_at
                    FROM quizzes
                    WHERE quiz_id = $1
                    "#,
                )
                .bind(quiz_id)
                .fetch_optional(pool)
                .await?;
                Ok(quiz)
            }
            Self::InMemory(store) => Ok(store.read().await.get(quiz_id).cloned()),
        }
    }

    /// Deletes quizzes created before `cutoff`, returning how many went.
    pub async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        match self {
            Self::Postgres(pool) => {
                let result = sqlx::query("DELETE FROM quizzes WHERE created_at < $1")
                    .bind(cutoff)
                    .execute(pool)
                    .await?;
                Ok(result.rows_affected())
            }
            Self::InMemory(store) => {
                let mut store = store.write().await;
                let before = store.len();
                store.retain(|_, quiz| !quiz.is_older_than(cutoff));
                Ok((before - store.len()) as u64)
            }
        }
    }
}
