use std::sync::Arc;

use crate::{
    auth::{password::verify_password, JwtService},
    errors::{AppError, AppResult},
    models::dto::response::{AuthUser, ValidateResponse},
    repositories::UserRepository,
};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    /// Checks credentials and issues a session token. Unknown email and wrong
    /// password produce distinct messages, matching the client contract.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::Unauthorized("Unauthorized".into()));
        }

        self.jwt.issue(user.id, user.role)
    }

    /// Confirms the session's user still exists and echoes id and role.
    pub async fn validate(&self, user_id: i64) -> AppResult<ValidateResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

        Ok(ValidateResponse {
            message: "Authenticated".into(),
            user: AuthUser {
                id: user.id,
                role: user.role,
            },
        })
    }
}
