use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{NewQuiz, Quiz},
    repositories::QuizRepository,
};

#[derive(Default)]
struct Inner {
    quizzes: BTreeMap<i64, Quiz>,
    last_id: i64,
}

/// Process-local store, used by tests and by `STORE_BACKEND=memory`.
#[derive(Default)]
pub struct InMemoryQuizRepository {
    inner: RwLock<Inner>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn list_all(&self) -> AppResult<Vec<Quiz>> {
        let inner = self.inner.read().await;
        Ok(inner.quizzes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let inner = self.inner.read().await;
        Ok(inner.quizzes.get(&id).cloned())
    }

    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let quiz = Quiz::with_id(inner.last_id, quiz);
        inner.quizzes.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn bulk_seed(&self, quizzes: Vec<Quiz>) -> AppResult<usize> {
        let mut inner = self.inner.write().await;

        // The counter moves first, as in the MongoDB store, so a rejected
        // batch still burns its ids.
        if let Some(max_id) = quizzes.iter().map(|q| q.id).max() {
            inner.last_id = inner.last_id.max(max_id);
        }

        // All-or-nothing, like a single insert_many against a unique index.
        if let Some(existing) = quizzes.iter().find(|q| inner.quizzes.contains_key(&q.id)) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                existing.id
            )));
        }

        let count = quizzes.len();
        for quiz in quizzes {
            inner.quizzes.insert(quiz.id, quiz);
        }

        log::info!("Seeded {} quizzes", count);
        Ok(count)
    }

    async fn update(&self, id: i64, quiz: NewQuiz) -> AppResult<Quiz> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .quizzes
            .get_mut(&id)
            .ok_or_else(|| AppError::quiz_not_found(id))?;

        stored.apply(quiz);
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .quizzes
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::quiz_not_found(id))
    }
}
