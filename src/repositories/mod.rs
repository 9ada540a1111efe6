pub mod in_memory_quiz_repository;
pub mod quiz_repository;

pub use in_memory_quiz_repository::InMemoryQuizRepository;
pub use quiz_repository::{MongoQuizRepository, QuizRepository};

#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
