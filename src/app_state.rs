use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        fallback_service::FallbackBank,
        generation_registry::GenerationRegistry,
        model_service::{AnswerFetcher, GeminiModelService},
        notes_service::NotesService,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub notes_service: Arc<NotesService>,
    pub registry: Arc<GenerationRegistry>,
    pub config: Arc<Config>,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let fetcher = Arc::new(GeminiModelService::new(&config)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Wires every service around one model backend.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn AnswerFetcher>) -> Self {
        let shutdown = CancellationToken::new();
        let fallback = Arc::new(FallbackBank::builtin());

        Self {
            quiz_service: Arc::new(QuizService::new(fetcher.clone(), fallback)),
            notes_service: Arc::new(NotesService::new(fetcher)),
            registry: Arc::new(GenerationRegistry::new(shutdown.clone())),
            config: Arc::new(config),
            shutdown,
        }
    }
}
