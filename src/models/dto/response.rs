use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::{answers_match, Quiz};

/// What a player sees: the question, plus whatever they typed so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct PlayView {
    pub id: i64,
    pub question: String,
    pub response: String,
}

impl PlayView {
    pub fn new(quiz: Quiz, response: Option<String>) -> Self {
        PlayView {
            id: quiz.id,
            question: quiz.question,
            response: response.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct CheckResult {
    pub id: i64,
    pub question: String,
    pub response: String,
    pub is_correct: bool,
    pub message: String,
}

impl CheckResult {
    pub fn evaluate(quiz: &Quiz, response: &str) -> Self {
        let is_correct = answers_match(&quiz.answer, response);
        let message = if is_correct {
            format!("Yes, \"{}\" is the {}", response, quiz.question)
        } else {
            format!("No, \"{}\" is not the {}", response, quiz.question)
        };

        CheckResult {
            id: quiz.id,
            question: quiz.question.clone(),
            response: response.to_string(),
            is_correct,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

pub type CreateQuizResponse = ApiResponse<Quiz>;
pub type UpdateQuizResponse = ApiResponse<Quiz>;

#[derive(Debug, Serialize, SimpleObject)]
pub struct DeleteQuizResponse {
    pub message: String,
}
