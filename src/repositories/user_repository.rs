use async_trait::async_trait;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{User, UserInfo, UserProfile},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>>;
    async fn find_info(&self, user_id: i64) -> AppResult<Option<UserInfo>>;
    async fn find_profile(&self, user_id: i64) -> AppResult<Option<UserProfile>>;
    async fn email_taken_by_other(&self, email: &str, user_id: i64) -> AppResult<bool>;
    async fn update_profile(
        &self,
        user_id: i64,
        name: &str,
        email: &str,
        phone_number: Option<&str>,
    ) -> AppResult<()>;
}

pub struct SqliteUserRepository {
    db: Database,
}

impl SqliteUserRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(user)
    }

    async fn find_info(&self, user_id: i64) -> AppResult<Option<UserInfo>> {
        let info =
            sqlx::query_as::<_, UserInfo>("SELECT id, name, email, role FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(info)
    }

    async fn find_profile(&self, user_id: i64) -> AppResult<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "SELECT id, name, email, phone_number FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(profile)
    }

    async fn email_taken_by_other(&self, email: &str, user_id: i64) -> AppResult<bool> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = ? AND id != ?")
                .bind(email)
                .bind(user_id)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(row.is_some())
    }

    async fn update_profile(
        &self,
        user_id: i64,
        name: &str,
        email: &str,
        phone_number: Option<&str>,
    ) -> AppResult<()> {
        sqlx::query("UPDATE users SET name = ?, email = ?, phone_number = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(phone_number)
            .bind(user_id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }
}
