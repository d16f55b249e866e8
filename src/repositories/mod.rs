pub mod access_repository;
pub mod activity_repository;
pub mod content_repository;
pub mod dashboard_repository;
pub mod reset_token_repository;
pub mod reunion_repository;
pub mod user_repository;

pub use access_repository::{AccessRepository, SqliteAccessRepository};
pub use activity_repository::{ActivityRepository, SqliteActivityRepository};
pub use content_repository::{ContentRepository, SqliteContentRepository};
pub use dashboard_repository::{DashboardRepository, SqliteDashboardRepository};
pub use reset_token_repository::{ResetTokenRepository, SqliteResetTokenRepository};
pub use reunion_repository::{ReunionRepository, SqliteReunionRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};
