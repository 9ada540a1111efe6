use crate::{
    errors::AppResult,
    models::domain::{NewQuiz, Quiz},
};

/// Built-in quizzes loaded into an empty store at startup, as `(id, question, answer)`.
pub const SEED_QUIZZES: [(i64, &str, &str); 4] = [
    (1, "Capital of Italy", "Rome"),
    (2, "Capital of France", "Paris"),
    (3, "Capital of Spain", "Madrid"),
    (4, "Capital of Portugal", "Lisbon"),
];

pub fn seed_quizzes() -> AppResult<Vec<Quiz>> {
    SEED_QUIZZES
        .iter()
        .map(|&(id, question, answer)| -> AppResult<Quiz> {
            Ok(Quiz::with_id(id, NewQuiz::new(question, answer)?))
        })
        .collect()
}
