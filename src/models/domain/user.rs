use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Mentor,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub role: UserRole,
    pub created_at: i64,
}

/// Self-service profile view; never exposes the credential hash.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

/// Identity summary embedded in dashboard and validate responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}
