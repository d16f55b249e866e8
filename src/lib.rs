pub mod app_state;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod mailer;
pub mod models;
pub mod repositories;
pub mod services;
