use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ExamQuestionsRequest, response::ChatResponse},
};

#[post("/api/exam-questions")]
pub async fn build_exam_questions(
    state: web::Data<AppState>,
    request: web::Json<ExamQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let completion = state
        .exam_service
        .build_questions(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ChatResponse::new(completion)))
}
