use std::sync::Arc;

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    get, post, web, HttpResponse,
};

use crate::{
    app_state::AppState,
    auth::{extractor::AUTH_COOKIE, AuthenticatedUser},
    errors::AppError,
    models::dto::{request::LoginRequest, response::MessageResponse},
};

fn session_cookie(token: String, max_age_hours: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::hours(max_age_hours))
        .finish()
}

#[post("/auth/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = state.auth.login(&body.email, &body.password).await?;

    let cookie = session_cookie(
        token,
        state.config.jwt_expiration_hours,
        state.config.secure_cookies,
    );

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Login successful")))
}

#[post("/auth/logout")]
pub async fn logout(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    // Expired cookie with the same attributes overwrites the session.
    let mut cookie = session_cookie(String::new(), 0, state.config.secure_cookies);
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Logout successful")))
}

#[get("/auth/validate")]
pub async fn validate(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state.auth.validate(auth.user_id()).await?;
    Ok(HttpResponse::Ok().json(response))
}
