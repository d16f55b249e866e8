pub mod auth_handler;
pub mod dashboard_handler;
pub mod health_handler;
pub mod lesson_handler;
pub mod profile_handler;
pub mod pwd_handler;
pub mod reunion_handler;

use actix_web::web;

/// Registers every route. Shared between the real server and the handler
/// tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth_handler::login)
        .service(auth_handler::logout)
        .service(auth_handler::validate)
        .service(lesson_handler::lesson_detail)
        .service(lesson_handler::text_content)
        .service(lesson_handler::video_content)
        .service(lesson_handler::activity_content)
        .service(lesson_handler::submit_answer)
        .service(lesson_handler::reunion_content)
        .service(lesson_handler::content_type)
        .service(dashboard_handler::dashboard)
        .service(profile_handler::get_profile)
        .service(profile_handler::update_profile)
        .service(profile_handler::request_reset)
        .service(profile_handler::confirm_reset)
        .service(pwd_handler::link_reset)
        .service(pwd_handler::validate_hash)
        .service(pwd_handler::validate_code)
        .service(reunion_handler::list_reunions)
        .service(reunion_handler::create_reunion)
        .service(reunion_handler::update_reunion)
        .service(reunion_handler::delete_reunion)
        .service(health_handler::health)
        .service(health_handler::ready);
}
