use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ChatMessageRequest, response::ChatResponse},
};

#[post("/api/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let completion = state.chat_service.respond(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ChatResponse::new(completion)))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
