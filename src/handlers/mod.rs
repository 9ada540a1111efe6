pub mod graphql_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use graphql_handler::{graphiql, graphql};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::{
    check_answer, create_quiz, delete_quiz, delete_quiz_override, edit_quiz, index,
    list_quizzes, new_quiz_form, play_quiz, update_quiz, update_quiz_legacy,
};

/// Registers the REST routes. `/quizzes/new` must come before the
/// `/quizzes/{id}` override route or "new" would be taken as an id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(list_quizzes)
        .service(new_quiz_form)
        .service(play_quiz)
        .service(check_answer)
        .service(create_quiz)
        .service(edit_quiz)
        .service(update_quiz)
        .service(update_quiz_legacy)
        .service(delete_quiz)
        .service(delete_quiz_override)
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .default_service(web::to(quiz_handler::not_found));
}
