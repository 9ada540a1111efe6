use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Quiz {
    pub id: i64,          // Assigned by the repository, never reused
    pub question: String, // Non-empty
    pub answer: String,   // Compared verbatim against responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quiz {
    /// Builds a record with an explicit id. Only the seed and repositories
    /// assign ids; everything else goes through `NewQuiz`.
    pub fn with_id(id: i64, quiz: NewQuiz) -> Self {
        let now = Utc::now();
        Quiz {
            id,
            question: quiz.question,
            answer: quiz.answer,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Replaces question and answer in place, keeping id and creation time.
    pub fn apply(&mut self, quiz: NewQuiz) {
        self.question = quiz.question;
        self.answer = quiz.answer;
        self.updated_at = Some(Utc::now());
    }
}

/// A question/answer pair that has passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct NewQuiz {
    #[validate(length(min = 1, message = "question must not be empty"))]
    question: String,

    #[validate(length(min = 1, message = "answer must not be empty"))]
    answer: String,
}

impl NewQuiz {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> AppResult<Self> {
        let quiz = NewQuiz {
            question: question.into(),
            answer: answer.into(),
        };
        quiz.validate()?;
        Ok(quiz)
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Parses a quiz id as it arrives from a path segment or GraphQL `ID`.
///
/// Only plain decimal digits naming a positive `i64` are accepted; signs,
/// whitespace, zero and overflow are all rejected.
pub fn parse_quiz_id(raw: &str) -> AppResult<i64> {
    let invalid = || AppError::ValidationError(format!("Invalid quiz id '{}'", raw));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}

/// Exact comparison: no trimming, case folding or normalization.
pub fn answers_match(stored: &str, response: &str) -> bool {
    stored == response
}
