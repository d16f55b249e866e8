use async_trait::async_trait;

use crate::{db::Database, errors::AppResult, models::domain::PwdResetToken};

#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    /// Replaces any live tokens for the user with a freshly issued one.
    /// Delete and insert share a transaction so at most one token is ever
    /// live per user.
    async fn rotate(
        &self,
        user_id: i64,
        token: &str,
        hash_url: &str,
        expires_at: i64,
    ) -> AppResult<()>;

    async fn find_valid_for_user(&self, user_id: i64, now: i64)
        -> AppResult<Option<PwdResetToken>>;

    async fn find_valid_by_hash(&self, hash_url: &str, now: i64)
        -> AppResult<Option<PwdResetToken>>;

    async fn find_valid_by_hash_and_token(
        &self,
        hash_url: &str,
        token: &str,
        now: i64,
    ) -> AppResult<Option<PwdResetToken>>;

    /// Updates the user's password and purges all their reset tokens in one
    /// transaction. A token is single use.
    async fn consume(&self, user_id: i64, password_hash: &str) -> AppResult<()>;
}

pub struct SqliteResetTokenRepository {
    db: Database,
}

impl SqliteResetTokenRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl ResetTokenRepository for SqliteResetTokenRepository {
    async fn rotate(
        &self,
        user_id: i64,
        token: &str,
        hash_url: &str,
        expires_at: i64,
    ) -> AppResult<()> {
        let mut tx = self.db.pool().begin().await?;

        sqlx::query("DELETE FROM pwd_reset_tokens WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO pwd_reset_tokens (user_id, token, hash_url, expires_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(token)
        .bind(hash_url)
        .bind(expires_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_valid_for_user(
        &self,
        user_id: i64,
        now: i64,
    ) -> AppResult<Option<PwdResetToken>> {
        let token = sqlx::query_as::<_, PwdResetToken>(
            "SELECT id, user_id, token, hash_url, expires_at
             FROM pwd_reset_tokens
             WHERE user_id = ? AND expires_at > ?",
        )
        .bind(user_id)
        .bind(now)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(token)
    }

    async fn find_valid_by_hash(
        &self,
        hash_url: &str,
        now: i64,
    ) -> AppResult<Option<PwdResetToken>> {
        let token = sqlx::query_as::<_, PwdResetToken>(
            "SELECT id, user_id, token, hash_url, expires_at
             FROM pwd_reset_tokens
             WHERE hash_url = ? AND expires_at > ?",
        )
        .bind(hash_url)
        .bind(now)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(token)
    }

    async fn find_valid_by_hash_and_token(
        &self,
        hash_url: &str,
        token: &str,
        now: i64,
    ) -> AppResult<Option<PwdResetToken>> {
        let row = sqlx::query_as::<_, PwdResetToken>(
            "SELECT id, user_id, token, hash_url, expires_at
             FROM pwd_reset_tokens
             WHERE hash_url = ? AND token = ? AND expires_at > ?",
        )
        .bind(hash_url)
        .bind(token)
        .bind(now)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(row)
    }

    async fn consume(&self, user_id: i64, password_hash: &str) -> AppResult<()> {
        let mut tx = self.db.pool().begin().await?;

        sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM pwd_reset_tokens WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
