use std::sync::Arc;

use crate::{
    constants::seed_quizzes::seed_quizzes,
    errors::{AppError, AppResult},
    models::{
        domain::{parse_quiz_id, NewQuiz, Quiz},
        dto::{
            request::QuizRequest,
            response::{CheckResult, PlayView},
        },
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.list_all().await
    }

    pub async fn get_play_view(&self, id: &str, response: Option<String>) -> AppResult<PlayView> {
        let quiz = self.get_quiz(id).await?;
        Ok(PlayView::new(quiz, response))
    }

    pub async fn check_answer(&self, id: &str, response: &str) -> AppResult<CheckResult> {
        let quiz = self.get_quiz(id).await?;
        Ok(CheckResult::evaluate(&quiz, response))
    }

    pub async fn get_edit_view(&self, id: &str) -> AppResult<Quiz> {
        self.get_quiz(id).await
    }

    pub async fn create_quiz(&self, request: QuizRequest) -> AppResult<Quiz> {
        let new_quiz = NewQuiz::try_from(request)?;
        let quiz = self.repository.create(new_quiz).await?;

        log::info!("Created quiz {}", quiz.id);
        Ok(quiz)
    }

    pub async fn update_quiz(&self, id: &str, request: QuizRequest) -> AppResult<Quiz> {
        let id = parse_quiz_id(id)?;
        let new_quiz = NewQuiz::try_from(request)?;
        let quiz = self.repository.update(id, new_quiz).await?;

        log::info!("Updated quiz {}", quiz.id);
        Ok(quiz)
    }

    /// Returns the id that was removed, in canonical form.
    pub async fn delete_quiz(&self, id: &str) -> AppResult<i64> {
        let id = parse_quiz_id(id)?;
        self.repository.delete(id).await?;

        log::info!("Deleted quiz {}", id);
        Ok(id)
    }

    /// Loads the built-in quizzes when the store is empty; returns how many
    /// were inserted. Safe to call repeatedly since existing data is never
    /// touched.
    pub async fn ensure_seeded(&self) -> AppResult<usize> {
        let existing = self.list_quizzes().await?;
        if !existing.is_empty() {
            log::info!("Quiz store already has {} quizzes", existing.len());
            return Ok(0);
        }

        let seeded = self.repository.bulk_seed(seed_quizzes()?).await?;
        log::info!("Quiz store created with {} quizzes", seeded);
        Ok(seeded)
    }

    async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let id = parse_quiz_id(id)?;
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            log::debug!("Quiz {} not found", id);
            AppError::quiz_not_found(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryQuizRepository, MockQuizRepository};

    fn request(question: &str, answer: &str) -> QuizRequest {
        QuizRequest {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn in_memory_service() -> QuizService {
        QuizService::new(Arc::new(InMemoryQuizRepository::new()))
    }

    #[tokio::test]
    async fn test_malformed_ids_never_reach_the_store() {
        // No expectations set: any repository call would panic.
        let service = QuizService::new(Arc::new(MockQuizRepository::new()));

        for id in ["abc", "0", "-3", ""] {
            assert!(matches!(
                service.get_play_view(id, None).await,
                Err(AppError::ValidationError(_))
            ));
            assert!(matches!(
                service.check_answer(id, "Rome").await,
                Err(AppError::ValidationError(_))
            ));
            assert!(matches!(
                service.get_edit_view(id).await,
                Err(AppError::ValidationError(_))
            ));
            assert!(matches!(
                service.update_quiz(id, request("Q", "A")).await,
                Err(AppError::ValidationError(_))
            ));
            assert!(matches!(
                service.delete_quiz(id).await,
                Err(AppError::ValidationError(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_invalid_fields_never_reach_the_store() {
        let service = QuizService::new(Arc::new(MockQuizRepository::new()));

        assert!(matches!(
            service.create_quiz(request("", "Berlin")).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.update_quiz("1", request("Capital of Germany", "")).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_store_errors_propagate_unchanged() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::DatabaseError("connection reset".to_string())));
        let service = QuizService::new(Arc::new(repository));

        let result = service.check_answer("1", "Rome").await;
        assert!(matches!(result, Err(AppError::DatabaseError(msg)) if msg == "connection reset"));
    }

    #[tokio::test]
    async fn test_delete_returns_parsed_id() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_delete()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(()));
        let service = QuizService::new(Arc::new(repository));

        assert_eq!(service.delete_quiz("007").await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_ensure_seeded_skips_bulk_insert_when_data_exists() {
        let mut repository = MockQuizRepository::new();
        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![Quiz::with_id(
                9,
                NewQuiz::new("Capital of Chile", "Santiago").unwrap(),
            )])
        });
        repository.expect_bulk_seed().never();
        let service = QuizService::new(Arc::new(repository));

        assert_eq!(service.ensure_seeded().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_check_answer_is_exact() {
        let service = in_memory_service();
        service.ensure_seeded().await.unwrap();

        assert!(service.check_answer("1", "Rome").await.unwrap().is_correct);
        assert!(!service.check_answer("1", "Rome ").await.unwrap().is_correct);
        assert!(!service.check_answer("1", " Rome").await.unwrap().is_correct);
        assert!(!service.check_answer("1", "rome").await.unwrap().is_correct);
        assert!(!service.check_answer("1", "").await.unwrap().is_correct);
    }

    #[tokio::test]
    async fn test_update_never_creates() {
        let service = in_memory_service();

        let result = service.update_quiz("12", request("Q", "A")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(service.list_quizzes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_play_does_not_modify_quiz() {
        let service = in_memory_service();
        service.ensure_seeded().await.unwrap();
        let before = service.get_edit_view("2").await.unwrap();

        let view = service
            .get_play_view("2", Some("Lyon".to_string()))
            .await
            .unwrap();
        service.check_answer("2", "Lyon").await.unwrap();

        assert_eq!(view.question, "Capital of France");
        assert_eq!(view.response, "Lyon");
        assert_eq!(service.get_edit_view("2").await.unwrap(), before);
    }
}
