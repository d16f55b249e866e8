use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    mailer::{LogMailer, ResetCodeMailer},
    repositories::{
        SqliteAccessRepository, SqliteActivityRepository, SqliteContentRepository,
        SqliteDashboardRepository, SqliteResetTokenRepository, SqliteReunionRepository,
        SqliteUserRepository,
    },
    services::{
        ActivityService, AuthService, ContentService, DashboardService, ProfileService,
        ReunionService,
    },
};

/// Shared application state: config, pool and the service graph. Wired once
/// at startup and cloned into every worker via `web::Data`.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub jwt: Arc<JwtService>,
    pub auth: AuthService,
    pub content: ContentService,
    pub activity: ActivityService,
    pub dashboard: DashboardService,
    pub reunion: ReunionService,
    pub profile: ProfileService,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        let jwt = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        let users = Arc::new(SqliteUserRepository::new(&db));
        let access = Arc::new(SqliteAccessRepository::new(&db));
        let contents = Arc::new(SqliteContentRepository::new(&db));
        let activities = Arc::new(SqliteActivityRepository::new(&db));
        let dashboard_repo = Arc::new(SqliteDashboardRepository::new(&db));
        let reunions = Arc::new(SqliteReunionRepository::new(&db));
        let reset_tokens = Arc::new(SqliteResetTokenRepository::new(&db));
        let mailer: Arc<dyn ResetCodeMailer> = Arc::new(LogMailer);

        Self {
            auth: AuthService::new(users.clone(), jwt.clone()),
            content: ContentService::new(access.clone(), contents),
            activity: ActivityService::new(access.clone(), activities),
            dashboard: DashboardService::new(dashboard_repo),
            reunion: ReunionService::new(access, reunions),
            profile: ProfileService::new(users, reset_tokens, mailer),
            config,
            db,
            jwt,
        }
    }
}
