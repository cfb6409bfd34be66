use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::database::quiz_repository::QuizRepository;
use crate::dto::quiz_dto::{parse_answers, GenerateQuizResponse};
use crate::error::{Error, Result};
use crate::models::mcq::McqRecord;
use crate::models::quiz::Quiz;
use crate::nlp::{Document, TextAnalyzer};
use crate::services::distractor_service::CandidatePool;
use crate::services::embed_service::EmbedService;
use crate::services::grading_service::{GradeReport, GradingService};
use crate::services::mcq_service::McqGenerator;

#[derive(Clone)]
pub struct QuizService {
    analyzer: Arc<dyn TextAnalyzer>,
    embed_service: EmbedService,
    repository: QuizRepository,
    max_questions: usize,
    timeout: Duration,
    seed: Option<u64>,
    ttl: Option<chrono::Duration>,
}

impl QuizService {
    pub fn new(
        analyzer: Arc<dyn TextAnalyzer>,
        embed_service: EmbedService,
        repository: QuizRepository,
        config: &Config,
    ) -> Self {
        Self {
            analyzer,
            embed_service,
            repository,
            max_questions: config.max_questions,
            timeout: config.generation_timeout(),
            seed: config.generation_seed,
            ttl: config.quiz_ttl(),
        }
    }

    pub fn repository(&self) -> &QuizRepository {
        &self.repository
    }

    pub fn ttl(&self) -> Option<chrono::Duration> {
        self.ttl
    }

    /// Negative counts are rejected at the form layer; anything above the
    /// configured maximum is capped.
    pub fn clamp_questions(&self, requested: i64) -> usize {
        usize::try_from(requested.max(0))
            .unwrap_or(usize::MAX)
            .min(self.max_questions)
    }

    /// Runs generation under the configured deadline.
    ///
    /// Annotation and synthesis happen on the blocking pool. Candidate terms
    /// are embedded in between, so the synchronous core never waits on I/O.
    pub async fn generate_questions(&self, text: String, num_questions: usize) -> Result<Vec<McqRecord>> {
        match tokio::time::timeout(self.timeout, self.run_generation(text, num_questions)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "question generation timed out");
                Err(Error::Timeout(self.timeout.as_secs()))
            }
        }
    }

    async fn run_generation(&self, text: String, num_questions: usize) -> Result<Vec<McqRecord>> {
        if num_questions == 0 || text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let analyzer = Arc::clone(&self.analyzer);
        let doc = tokio::task::spawn_blocking(move || analyzer.analyze(&text))
            .await
            .map_err(|e| Error::Internal(format!("Text analysis failed: {}", e)))?;

        let vectors = self.embed_service.embed_terms(candidate_terms(&doc)).await;

        let analyzer = Arc::clone(&self.analyzer);
        let seed = self.seed;
        tokio::task::spawn_blocking(move || {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            McqGenerator::new(analyzer.as_ref())
                .with_vectors(vectors)
                .generate_from_document(&doc, num_questions, &mut rng)
        })
        .await
        .map_err(|e| Error::Internal(format!("Question generation failed: {}", e)))
    }

    pub async fn create_quiz(&self, text: String, requested: i64) -> Result<GenerateQuizResponse> {
        if text.trim().is_empty() {
            return Err(Error::BadRequest("Could not extract text from PDF.".to_string()));
        }

        let num_questions = self.clamp_questions(requested);
        let questions = self.generate_questions(text, num_questions).await?;
        if questions.is_empty() {
            return Err(Error::NotFound(
                "Could not generate MCQs from the provided text.".to_string(),
            ));
        }

        let quiz = Quiz::from_questions(&questions);
        self.repository.put(&quiz).await?;
        tracing::info!(
            quiz_id = %quiz.quiz_id,
            requested,
            generated = questions.len(),
            "quiz created"
        );

        Ok(GenerateQuizResponse::new(quiz.quiz_id, questions))
    }

    pub async fn grade_quiz(&self, quiz_id: &str, answers: &str) -> Result<GradeReport> {
        let quiz = self
            .find_live(quiz_id)
            .await?
            .ok_or_else(|| Error::NotFound("Quiz ID not found or expired.".to_string()))?;

        let submitted = parse_answers(answers)?;
        let report = GradingService::grade(&quiz.correct_answers, &submitted);
        tracing::info!(quiz_id, score = report.score, total = report.total, "quiz graded");
        Ok(report)
    }

    async fn find_live(&self, quiz_id: &str) -> Result<Option<Quiz>> {
        let quiz = self.repository.get(quiz_id).await?;
        Ok(match (quiz, self.ttl) {
            (Some(q), Some(ttl)) if q.is_older_than(Utc::now() - ttl) => None,
            (quiz, _) => quiz,
        })
    }

    /// Removes quizzes past their TTL. A no-op when no TTL is configured.
    pub async fn purge_expired(&self) -> Result<u64> {
        let Some(ttl) = self.ttl else {
            return Ok(0);
        };
        let removed = self.repository.purge_older_than(Utc::now() - ttl).await?;
        if removed > 0 {
            tracing::info!(removed, "purged expired quizzes");
        }
        Ok(removed)
    }
}

/// Subjects are always pool members, so embedding the pool covers both sides
/// of every similarity.
fn candidate_terms(doc: &Document) -> Vec<String> {
    CandidatePool::build(doc).iter().map(str::to_string).collect()
}
