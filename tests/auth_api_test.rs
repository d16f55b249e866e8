mod common;

use std::sync::Arc;

use actix_web::{
    cookie::Cookie,
    dev::{Service, ServiceResponse},
    test, web, App,
};
use serde_json::json;

use aula_server::{app_state::AppState, handlers};

async fn init(
    state: &Arc<AppState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(state.jwt.clone()))
            .configure(handlers::configure),
    )
    .await
}

fn auth_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "auth_token")
        .map(|c| c.into_owned())
}

#[actix_web::test]
async fn login_sets_session_cookie() {
    let state = common::test_state().await;
    common::seed(&state.db).await;
    let app = init(&state).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "ana@example.com", "password": common::USER_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let cookie = auth_cookie(&resp).expect("auth cookie");
    assert!(cookie.http_only().unwrap_or(false));
    assert!(!cookie.value().is_empty());
}

#[actix_web::test]
async fn bad_credentials_are_rejected() {
    let state = common::test_state().await;
    common::seed(&state.db).await;
    let app = init(&state).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "ana@example.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn validate_round_trip() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;
    let app = init(&state).await;

    let req = test::TestRequest::get().uri("/auth/validate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "ana@example.com", "password": common::USER_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = auth_cookie(&resp).unwrap();

    let req = test::TestRequest::get()
        .uri("/auth/validate")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Authenticated");
    assert_eq!(body["user"]["id"], fx.user_id);
    assert_eq!(body["user"]["role"], "student");
}

#[actix_web::test]
async fn protected_routes_require_the_cookie() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;
    let app = init(&state).await;

    for uri in [
        "/dashboard".to_string(),
        "/profile".to_string(),
        format!("/lessons/{}", fx.lesson_id),
        "/reunions".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401, "{uri}");
    }
}

#[actix_web::test]
async fn dashboard_over_http() {
    let state = common::test_state().await;
    common::seed(&state.db).await;
    let app = init(&state).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "ana@example.com", "password": common::USER_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = auth_cookie(&resp).unwrap();

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["courses"].as_array().unwrap().len(), 1);
    assert!(body["stats"]["totalActivities"].is_i64());
}

#[actix_web::test]
async fn logout_expires_the_cookie() {
    let state = common::test_state().await;
    common::seed(&state.db).await;
    let app = init(&state).await;

    let req = test::TestRequest::post().uri("/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let cookie = auth_cookie(&resp).expect("removal cookie");
    assert!(cookie.value().is_empty());
}

#[actix_web::test]
async fn health_endpoints_respond() {
    let state = common::test_state().await;
    let app = init(&state).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);
}
