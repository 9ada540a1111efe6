use std::sync::Arc;

use quiz_server::{
    errors::AppError,
    models::dto::request::QuizRequest,
    repositories::InMemoryQuizRepository,
    services::QuizService,
};

fn service() -> QuizService {
    QuizService::new(Arc::new(InMemoryQuizRepository::new()))
}

fn request(question: &str, answer: &str) -> QuizRequest {
    QuizRequest {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

#[tokio::test]
async fn seeding_an_empty_store_loads_the_built_ins() {
    let service = service();

    assert_eq!(service.ensure_seeded().await.unwrap(), 4);

    let quizzes = service.list_quizzes().await.unwrap();
    let pairs: Vec<(&str, &str)> = quizzes
        .iter()
        .map(|q| (q.question.as_str(), q.answer.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Capital of Italy", "Rome"),
            ("Capital of France", "Paris"),
            ("Capital of Spain", "Madrid"),
            ("Capital of Portugal", "Lisbon"),
        ]
    );
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate() {
    let service = service();

    assert_eq!(service.ensure_seeded().await.unwrap(), 4);
    assert_eq!(service.ensure_seeded().await.unwrap(), 0);
    assert_eq!(service.list_quizzes().await.unwrap().len(), 4);
}

#[tokio::test]
async fn created_quiz_takes_next_id_and_can_be_checked() {
    let service = service();
    service.ensure_seeded().await.unwrap();

    let quiz = service
        .create_quiz(request("Capital of Germany", "Berlin"))
        .await
        .unwrap();
    assert_eq!(quiz.id, 5);

    let result = service.check_answer("5", "Berlin").await.unwrap();
    assert!(result.is_correct);
    assert_eq!(result.question, "Capital of Germany");
}

#[tokio::test]
async fn create_then_edit_view_round_trips() {
    let service = service();

    let quiz = service
        .create_quiz(request("Largest planet", "Jupiter"))
        .await
        .unwrap();
    let edit = service.get_edit_view(&quiz.id.to_string()).await.unwrap();

    assert_eq!(edit.question, "Largest planet");
    assert_eq!(edit.answer, "Jupiter");
}

#[tokio::test]
async fn update_is_idempotent() {
    let service = service();
    service.ensure_seeded().await.unwrap();

    let first = service
        .update_quiz("3", request("Capital of Catalonia", "Barcelona"))
        .await
        .unwrap();
    let second = service
        .update_quiz("3", request("Capital of Catalonia", "Barcelona"))
        .await
        .unwrap();

    assert_eq!(first.id, 3);
    assert_eq!(second.id, 3);
    let edit = service.get_edit_view("3").await.unwrap();
    assert_eq!(edit.question, "Capital of Catalonia");
    assert_eq!(edit.answer, "Barcelona");
    assert_eq!(service.list_quizzes().await.unwrap().len(), 4);
}

#[tokio::test]
async fn deleted_quiz_stays_deleted() {
    let service = service();
    service.ensure_seeded().await.unwrap();

    service.delete_quiz("2").await.unwrap();

    assert!(matches!(
        service.get_edit_view("2").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_quiz("2").await,
        Err(AppError::NotFound(_))
    ));

    let created = service.create_quiz(request("Q", "A")).await.unwrap();
    assert_eq!(created.id, 5);
}

#[tokio::test]
async fn answers_are_compared_exactly() {
    let service = service();
    service.ensure_seeded().await.unwrap();

    assert!(service.check_answer("1", "Rome").await.unwrap().is_correct);

    let padded = service.check_answer("1", "Rome ").await.unwrap();
    assert!(!padded.is_correct);
    assert_eq!(padded.message, "No, \"Rome \" is not the Capital of Italy");
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let service = service();
    service.ensure_seeded().await.unwrap();

    assert!(matches!(
        service.get_play_view("999", None).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_play_view("1.0", None).await,
        Err(AppError::ValidationError(_))
    ));
}

#[tokio::test]
async fn empty_fields_are_rejected() {
    let service = service();

    assert!(matches!(
        service.create_quiz(request("", "Berlin")).await,
        Err(AppError::ValidationError(_))
    ));
    assert!(service.list_quizzes().await.unwrap().is_empty());
}
