use std::sync::Arc;

use crate::{
    config::{Config, StoreBackend},
    db::Database,
    errors::AppResult,
    repositories::{InMemoryQuizRepository, MongoQuizRepository, QuizRepository},
    services::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub db: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let state = match config.store_backend {
            StoreBackend::Mongo => {
                let db = Database::connect(&config).await?;

                let quiz_repository =
                    Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
                quiz_repository.ensure_indexes().await?;

                Self::build(quiz_repository, Some(db), config)
            }
            StoreBackend::Memory => {
                log::warn!("Using in-memory quiz store, data will not survive a restart");
                Self::build(Arc::new(InMemoryQuizRepository::new()), None, config)
            }
        };

        state.seed().await;
        Ok(state)
    }

    pub fn with_repository(repository: Arc<dyn QuizRepository>, config: Config) -> Self {
        Self::build(repository, None, config)
    }

    fn build(repository: Arc<dyn QuizRepository>, db: Option<Database>, config: Config) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(repository)),
            db,
            config: Arc::new(config),
        }
    }

    /// Best-effort bootstrap: a failed seed is logged and the server keeps serving.
    pub async fn seed(&self) {
        if let Err(err) = self.quiz_service.ensure_seeded().await {
            log::error!("Failed to seed quiz store: {}", err);
        }
    }
}
