pub mod seed_quizzes;
