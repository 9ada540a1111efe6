pub mod quiz;
pub use quiz::{answers_match, parse_quiz_id, NewQuiz, Quiz};
