use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{
            CreateScheduleRequest, ReunionListQuery, ScheduleDeleteQuery, UpdateScheduleRequest,
        },
        response::{MessageResponse, ScheduleCreatedResponse},
    },
};

#[get("/reunions")]
pub async fn list_reunions(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    query: web::Query<ReunionListQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .reunion
        .list(auth.user_id(), query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/reunions")]
pub async fn create_reunion(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    body: web::Json<CreateScheduleRequest>,
) -> Result<HttpResponse, AppError> {
    let id = state
        .reunion
        .create(auth.user_id(), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ScheduleCreatedResponse {
        id,
        message: "Reunion scheduled successfully".into(),
    }))
}

#[put("/reunions")]
pub async fn update_reunion(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    body: web::Json<UpdateScheduleRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .reunion
        .update(auth.user_id(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Reunion updated successfully")))
}

#[delete("/reunions")]
pub async fn delete_reunion(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    query: web::Query<ScheduleDeleteQuery>,
) -> Result<HttpResponse, AppError> {
    let id = query
        .into_inner()
        .id
        .ok_or_else(|| AppError::BadRequest("ID da reunião não fornecido".into()))?;
    state.reunion.delete(auth.user_id(), id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Reunion deleted successfully")))
}
