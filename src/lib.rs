pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod nlp;
pub mod routes;
pub mod services;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use reqwest::Client;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::database::quiz_repository::QuizRepository;
use crate::nlp::{HashedEmbedder, RuleBasedAnalyzer, TextAnalyzer};
use crate::services::embed_service::EmbedService;
use crate::services::quiz_service::QuizService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub quiz_service: QuizService,
}

impl AppState {
    /// State backed by the rule-based analyzer sized from `config`.
    pub fn new(config: Config, repository: QuizRepository) -> Self {
        let analyzer = RuleBasedAnalyzer::new(HashedEmbedder::new(config.embedding_dims));
        Self::with_analyzer(config, repository, Arc::new(analyzer))
    }

    pub fn with_analyzer(
        config: Config,
        repository: QuizRepository,
        analyzer: Arc<dyn TextAnalyzer>,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(config.embedding_timeout())
            .build()
            .unwrap_or_default();
        let embed_service = EmbedService::new(&config, http_client);
        let quiz_service = QuizService::new(analyzer, embed_service, repository, &config);
        Self {
            config: Arc::new(config),
            quiz_service,
        }
    }
}

pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/generate-quiz/", post(routes::quiz::generate_quiz))
        .route("/submit-quiz/", post(routes::quiz::submit_quiz))
        .route("/api/openapi.json", get(routes::docs::openapi_json))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
}
