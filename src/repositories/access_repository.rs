use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::ContentType};

/// Resolves whether a user can reach a resource through the enrollment chain
/// user → class_users → classes → courses → lessons → lesson_contents.
/// Existence of any row means access; results are never cached.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccessRepository: Send + Sync {
    async fn can_access_lesson(&self, user_id: i64, lesson_id: i64) -> AppResult<bool>;

    /// When `expected_type` is given the content's discriminant must match;
    /// a type mismatch is indistinguishable from no access.
    async fn can_access_content(
        &self,
        user_id: i64,
        lesson_id: i64,
        content_id: i64,
        expected_type: Option<ContentType>,
    ) -> AppResult<bool>;

    async fn can_access_reunion(&self, user_id: i64, reunion_id: i64) -> AppResult<bool>;

    async fn can_access_schedule(&self, user_id: i64, schedule_id: i64) -> AppResult<bool>;
}

pub struct SqliteAccessRepository {
    db: Database,
}

impl SqliteAccessRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl AccessRepository for SqliteAccessRepository {
    async fn can_access_lesson(&self, user_id: i64, lesson_id: i64) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1
             FROM lessons l
             JOIN courses c ON l.course_id = c.id
             JOIN classes cl ON c.id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             WHERE l.id = ? AND cu.user_id = ?",
        )
        .bind(lesson_id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.is_some())
    }

    async fn can_access_content(
        &self,
        user_id: i64,
        lesson_id: i64,
        content_id: i64,
        expected_type: Option<ContentType>,
    ) -> AppResult<bool> {
        const BASE: &str = "SELECT 1
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             JOIN courses c ON l.course_id = c.id
             JOIN classes cl ON c.id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             WHERE lc.id = ? AND l.id = ? AND cu.user_id = ?";

        let row: Option<(i64,)> = match expected_type {
            Some(content_type) => {
                let sql = format!("{BASE} AND lc.content_type = ?");
                sqlx::query_as(&sql)
                    .bind(content_id)
                    .bind(lesson_id)
                    .bind(user_id)
                    .bind(content_type.as_str())
                    .fetch_optional(self.db.pool())
                    .await?
            }
            None => sqlx::query_as(BASE)
                .bind(content_id)
                .bind(lesson_id)
                .bind(user_id)
                .fetch_optional(self.db.pool())
                .await?,
        };

        Ok(row.is_some())
    }

    async fn can_access_reunion(&self, user_id: i64, reunion_id: i64) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1
             FROM lesson_reunions lr
             JOIN lesson_contents lc ON lr.lesson_content_id = lc.id
             JOIN lessons l ON lc.lesson_id = l.id
             JOIN courses c ON l.course_id = c.id
             JOIN classes cl ON c.id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             WHERE lr.id = ? AND cu.user_id = ?",
        )
        .bind(reunion_id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.is_some())
    }

    async fn can_access_schedule(&self, user_id: i64, schedule_id: i64) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1
             FROM reunion_schedules rs
             JOIN lesson_reunions lr ON rs.reunion_id = lr.id
             JOIN lesson_contents lc ON lr.lesson_content_id = lc.id
             JOIN lessons l ON lc.lesson_id = l.id
             JOIN courses c ON l.course_id = c.id
             JOIN classes cl ON c.id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             WHERE rs.id = ? AND cu.user_id = ?",
        )
        .bind(schedule_id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.is_some())
    }
}
