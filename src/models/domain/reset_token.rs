use sqlx::FromRow;

/// A pending password-reset grant: a 6-digit code plus the URL-safe hash that
/// identifies the reset link. Expired or mismatched rows are treated as
/// absent everywhere.
#[derive(Debug, Clone, FromRow)]
pub struct PwdResetToken {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub hash_url: String,
    pub expires_at: i64,
}
