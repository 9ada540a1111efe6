use async_graphql::InputObject;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::NewQuiz,
};

/// Body of create and update requests, and the blank new-quiz form.
///
/// Missing fields deserialize as empty strings so that they are reported
/// as validation errors rather than extractor failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize, InputObject)]
#[serde(default)]
pub struct QuizRequest {
    pub question: String,
    pub answer: String,
}

impl TryFrom<QuizRequest> for NewQuiz {
    type Error = AppError;

    fn try_from(request: QuizRequest) -> AppResult<Self> {
        NewQuiz::new(request.question, request.answer)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseQuery {
    pub response: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MethodOverrideQuery {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

impl MethodOverrideQuery {
    pub fn is_delete(&self) -> bool {
        self.method.as_deref() == Some("DELETE")
    }
}
