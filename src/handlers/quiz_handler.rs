use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::QuizGenerationRequest, response::QuizResponse},
};

#[post("/api/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizGenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(QuizResponse::from(quiz)))
}
