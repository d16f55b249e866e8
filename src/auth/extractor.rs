use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::{
    auth::{Claims, JwtService},
    errors::AppError,
};

pub const AUTH_COOKIE: &str = "auth_token";

/// Extractor for the authenticated user. Reads the `auth_token` cookie and
/// verifies it against the [`JwtService`] registered in app data; any missing
/// or invalid token yields 401.
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn user_id(&self) -> i64 {
        self.0.user_id
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = (|| {
            let jwt_service = req
                .app_data::<web::Data<JwtService>>()
                .ok_or_else(|| AppError::Internal("JWT service not configured".to_string()))?;

            let cookie = req
                .cookie(AUTH_COOKIE)
                .ok_or_else(|| AppError::Unauthorized("Não autenticado".to_string()))?;

            let claims = jwt_service.verify(cookie.value())?;
            Ok(AuthenticatedUser(claims))
        })();

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, get, test, App, HttpResponse};

    use crate::{config::Config, models::domain::user::UserRole};

    #[get("/protected")]
    async fn protected(auth: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": auth.user_id() }))
    }

    fn jwt_service() -> JwtService {
        let config = Config::test_config();
        JwtService::new(&config.jwt_secret, 2)
    }

    #[actix_web::test]
    async fn test_missing_cookie_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt_service()))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::try_call_service(&app, req).await;

        match resp {
            Ok(resp) => assert_eq!(resp.status().as_u16(), 401),
            Err(e) => assert_eq!(e.as_response_error().status_code().as_u16(), 401),
        }
    }

    #[actix_web::test]
    async fn test_valid_cookie_passes() {
        let jwt = jwt_service();
        let token = jwt.issue(9, UserRole::Student).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .cookie(Cookie::new(AUTH_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}
