pub mod activity_service;
pub mod auth_service;
pub mod content_service;
pub mod dashboard_service;
pub mod profile_service;
pub mod reunion_service;

pub use activity_service::ActivityService;
pub use auth_service::AuthService;
pub use content_service::ContentService;
pub use dashboard_service::DashboardService;
pub use profile_service::ProfileService;
pub use reunion_service::ReunionService;
