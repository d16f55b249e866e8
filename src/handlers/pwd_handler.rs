use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{HashQuery, LinkResetRequest, ValidateCodeRequest},
        response::MessageResponse,
    },
};

/// Unauthenticated password reset through the mailed link.
#[post("/pwd/reset")]
pub async fn link_reset(
    state: web::Data<Arc<AppState>>,
    body: web::Json<LinkResetRequest>,
) -> Result<HttpResponse, AppError> {
    let message = state.profile.link_reset(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

#[get("/pwd/validate")]
pub async fn validate_hash(
    state: web::Data<Arc<AppState>>,
    query: web::Query<HashQuery>,
) -> Result<HttpResponse, AppError> {
    let hash = query
        .into_inner()
        .hash
        .ok_or_else(|| AppError::BadRequest("Hash não fornecido".into()))?;
    let message = state.profile.validate_hash(&hash).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

#[post("/pwd/validate")]
pub async fn validate_code(
    state: web::Data<Arc<AppState>>,
    body: web::Json<ValidateCodeRequest>,
) -> Result<HttpResponse, AppError> {
    let message = state.profile.validate_code(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}
