use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::UploadRequest};

#[post("/api/upload")]
pub async fn upload_document(
    state: web::Data<AppState>,
    request: web::Json<UploadRequest>,
) -> Result<HttpResponse, AppError> {
    let extracted = state.extract_service.extract(request.into_inner())?;
    Ok(HttpResponse::Ok().json(extracted))
}
