use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{error::InternalError, middleware::Logger, web, App, HttpServer};
use log::info;

use aula_server::{app_state::AppState, config::Config, errors::ErrorResponse, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if config.secure_cookies {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let state = Arc::new(state);
    let jwt = web::Data::from(state.jwt.clone());

    info!("listening on {host}:{port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        // Malformed bodies and query strings come back in the same
        // {"message": ...} shape as every other error.
        let json_cfg = web::JsonConfig::default().error_handler(|err, _req| {
            let message = err.to_string();
            InternalError::from_response(
                err,
                actix_web::HttpResponse::BadRequest().json(ErrorResponse { message }),
            )
            .into()
        });
        let query_cfg = web::QueryConfig::default().error_handler(|err, _req| {
            InternalError::from_response(
                err,
                actix_web::HttpResponse::BadRequest().json(ErrorResponse {
                    message: "Parâmetros insuficientes".into(),
                }),
            )
            .into()
        });

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(jwt.clone())
            .app_data(json_cfg)
            .app_data(query_cfg)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
