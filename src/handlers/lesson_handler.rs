use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::{domain::ContentType, dto::request::AnswerRequest},
};

#[get("/lessons/{lesson_id}")]
pub async fn lesson_detail(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let lesson_id = path.into_inner();
    let response = state.content.lesson_detail(auth.user_id(), lesson_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/lessons/{lesson_id}/{content_id}")]
pub async fn content_type(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (lesson_id, content_id) = path.into_inner();
    let response = state
        .content
        .content_type_of(auth.user_id(), lesson_id, content_id)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/lessons/{lesson_id}/{content_id}/text")]
pub async fn text_content(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (lesson_id, content_id) = path.into_inner();
    let payload = state
        .content
        .fetch(auth.user_id(), lesson_id, content_id, ContentType::Text)
        .await?;
    Ok(HttpResponse::Ok().json(payload))
}

#[get("/lessons/{lesson_id}/{content_id}/video")]
pub async fn video_content(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (lesson_id, content_id) = path.into_inner();
    let payload = state
        .content
        .fetch(auth.user_id(), lesson_id, content_id, ContentType::Video)
        .await?;
    Ok(HttpResponse::Ok().json(payload))
}

#[get("/lessons/{lesson_id}/{content_id}/activity")]
pub async fn activity_content(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (lesson_id, content_id) = path.into_inner();
    let payload = state
        .content
        .fetch(auth.user_id(), lesson_id, content_id, ContentType::Activity)
        .await?;
    Ok(HttpResponse::Ok().json(payload))
}

#[get("/lessons/{lesson_id}/{content_id}/reunion")]
pub async fn reunion_content(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (lesson_id, content_id) = path.into_inner();
    let payload = state
        .content
        .fetch(auth.user_id(), lesson_id, content_id, ContentType::Reunion)
        .await?;
    Ok(HttpResponse::Ok().json(payload))
}

#[post("/lessons/{lesson_id}/{content_id}/activity/answer")]
pub async fn submit_answer(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    path: web::Path<(i64, i64)>,
    body: web::Json<AnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (lesson_id, content_id) = path.into_inner();
    let response = state
        .activity
        .submit_answer(
            auth.user_id(),
            lesson_id,
            content_id,
            body.statement_id,
            body.option_id,
        )
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
