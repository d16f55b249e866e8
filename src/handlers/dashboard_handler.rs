use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::AuthenticatedUser, errors::AppError};

#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state.dashboard.build(auth.user_id()).await?;
    Ok(HttpResponse::Ok().json(response))
}
