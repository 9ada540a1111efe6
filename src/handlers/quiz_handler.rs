use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{MethodOverrideQuery, QuizRequest, ResponseQuery},
        response::{CreateQuizResponse, DeleteQuizResponse, UpdateQuizResponse},
    },
};

#[get("/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_quizzes_inner(&state).await
}

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_quizzes_inner(&state).await
}

async fn list_quizzes_inner(state: &AppState) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/quizzes/new")]
pub async fn new_quiz_form() -> HttpResponse {
    HttpResponse::Ok().json(QuizRequest::default())
}

#[get("/quizzes/{id}/play")]
pub async fn play_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    query: web::Query<ResponseQuery>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .quiz_service
        .get_play_view(&id, query.into_inner().response)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

#[get("/quizzes/{id}/check")]
pub async fn check_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    query: web::Query<ResponseQuery>,
) -> Result<HttpResponse, AppError> {
    let response = query.into_inner().response.unwrap_or_default();
    let result = state.quiz_service.check_answer(&id, &response).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(CreateQuizResponse {
        message: format!("Quiz {} created", quiz.id),
        data: quiz,
    }))
}

#[get("/quizzes/{id}/edit")]
pub async fn edit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_edit_view(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    update_quiz_inner(&state, &id, request.into_inner()).await
}

// Path used by the original edit form.
#[put("/quizzes/{id}/update")]
pub async fn update_quiz_legacy(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    update_quiz_inner(&state, &id, request.into_inner()).await
}

async fn update_quiz_inner(
    state: &AppState,
    id: &str,
    request: QuizRequest,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.update_quiz(id, request).await?;
    Ok(HttpResponse::Ok().json(UpdateQuizResponse {
        message: format!("Quiz {} updated", quiz.id),
        data: quiz,
    }))
}

#[delete("/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    delete_quiz_inner(&state, &id).await
}

/// `GET /quizzes/{id}?_method=DELETE`, for clients that can only follow links.
#[get("/quizzes/{id}")]
pub async fn delete_quiz_override(
    state: web::Data<AppState>,
    id: web::Path<String>,
    query: web::Query<MethodOverrideQuery>,
) -> Result<HttpResponse, AppError> {
    if !query.is_delete() {
        return Err(route_not_found());
    }
    delete_quiz_inner(&state, &id).await
}

async fn delete_quiz_inner(state: &AppState, id: &str) -> Result<HttpResponse, AppError> {
    let id = state.quiz_service.delete_quiz(id).await?;
    Ok(HttpResponse::Ok().json(DeleteQuizResponse {
        message: format!("Quiz {} deleted", id),
    }))
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(route_not_found())
}

fn route_not_found() -> AppError {
    AppError::NotFound("resource not found or method not supported".to_string())
}
