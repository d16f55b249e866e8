use std::sync::Arc;

use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{ConfirmResetRequest, UpdateProfileRequest},
        response::MessageResponse,
    },
};

#[get("/profile")]
pub async fn get_profile(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state.profile.profile(auth.user_id()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/profile")]
pub async fn update_profile(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .profile
        .update_profile(auth.user_id(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/profile/reset-password")]
pub async fn request_reset(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let message = state.profile.request_reset(auth.user_id()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

#[post("/profile/confirm-reset")]
pub async fn confirm_reset(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    body: web::Json<ConfirmResetRequest>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .profile
        .confirm_reset(auth.user_id(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}
