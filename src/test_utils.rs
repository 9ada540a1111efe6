use crate::models::{domain::Quiz, dto::request::QuizRequest};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::models::domain::NewQuiz;

    /// A valid create/update body
    pub fn quiz_request(question: &str, answer: &str) -> QuizRequest {
        QuizRequest {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    /// A stored quiz with a fixed id
    pub fn test_quiz(id: i64, question: &str, answer: &str) -> Quiz {
        Quiz::with_id(id, NewQuiz::new(question, answer).expect("fixture should be valid"))
    }

    /// Quizzes that are not part of the built-in seed
    pub fn test_quizzes() -> Vec<Quiz> {
        vec![
            test_quiz(10, "Capital of Germany", "Berlin"),
            test_quiz(11, "Capital of Austria", "Vienna"),
            test_quiz(12, "Capital of Greece", "Athens"),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{
        repositories::{InMemoryQuizRepository, QuizRepository},
        services::QuizService,
    };
    use std::sync::Arc;

    #[test]
    fn test_fixtures_test_quizzes() {
        let quizzes = test_quizzes();
        assert_eq!(quizzes.len(), 3);
        assert_eq!(quizzes[0].id, 10);
        assert_eq!(quizzes[2].answer, "Athens");
    }

    #[tokio::test]
    async fn test_existing_data_is_not_reseeded() {
        let repository = Arc::new(InMemoryQuizRepository::new());
        repository.bulk_seed(test_quizzes()).await.unwrap();
        let service = QuizService::new(repository);

        assert_eq!(service.ensure_seeded().await.unwrap(), 0);

        let quizzes = service.list_quizzes().await.unwrap();
        let ids: Vec<i64> = quizzes.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);

        let created = service
            .create_quiz(quiz_request("Capital of Norway", "Oslo"))
            .await
            .unwrap();
        assert_eq!(created.id, 13);
    }
}
