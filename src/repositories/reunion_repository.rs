use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::{db::Database, errors::AppResult, models::domain::ReunionOccurrence};

#[async_trait]
pub trait ReunionRepository: Send + Sync {
    /// Occurrences in the given month of the given year, for reunions the
    /// user's enrollment reaches. Chronological order.
    async fn occurrences_in_month(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> AppResult<Vec<ReunionOccurrence>>;

    /// Occurrences between the two dates, inclusive on both ends.
    async fn occurrences_in_range(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<ReunionOccurrence>>;

    async fn create_schedule(
        &self,
        reunion_id: i64,
        scheduled_date: NaiveDate,
        scheduled_time: NaiveTime,
        duration_minutes: i64,
    ) -> AppResult<i64>;

    /// Returns false when no row matched the id.
    async fn update_schedule(
        &self,
        schedule_id: i64,
        scheduled_date: NaiveDate,
        scheduled_time: NaiveTime,
        duration_minutes: i64,
    ) -> AppResult<bool>;

    async fn delete_schedule(&self, schedule_id: i64) -> AppResult<bool>;
}

pub struct SqliteReunionRepository {
    db: Database,
}

impl SqliteReunionRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

const OCCURRENCE_SELECT: &str = "SELECT DISTINCT
    rs.id,
    rs.scheduled_date,
    rs.scheduled_time,
    rs.duration_minutes,
    lr.id AS reunion_id,
    lr.reunion_title,
    lr.reunion_description,
    lr.reunion_url,
    lc.id AS lesson_content_id,
    l.id AS lesson_id,
    l.title AS lesson_title,
    c.id AS course_id,
    c.name AS course_name
    FROM reunion_schedules rs
    JOIN lesson_reunions lr ON rs.reunion_id = lr.id
    JOIN lesson_contents lc ON lr.lesson_content_id = lc.id
    JOIN lessons l ON lc.lesson_id = l.id
    JOIN courses c ON l.course_id = c.id
    JOIN classes cl ON c.id = cl.course_id
    JOIN class_users cu ON cl.id = cu.class_id";

#[async_trait]
impl ReunionRepository for SqliteReunionRepository {
    async fn occurrences_in_month(
        &self,
        user_id: i64,
        month: u32,
        year: i32,
    ) -> AppResult<Vec<ReunionOccurrence>> {
        let sql = format!(
            "{OCCURRENCE_SELECT}
             WHERE cu.user_id = ?
               AND CAST(strftime('%m', rs.scheduled_date) AS INTEGER) = ?
               AND CAST(strftime('%Y', rs.scheduled_date) AS INTEGER) = ?
             ORDER BY rs.scheduled_date, rs.scheduled_time"
        );
        let occurrences = sqlx::query_as::<_, ReunionOccurrence>(&sql)
            .bind(user_id)
            .bind(month)
            .bind(year)
            .fetch_all(self.db.pool())
            .await?;
        Ok(occurrences)
    }

    async fn occurrences_in_range(
        &self,
        user_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<ReunionOccurrence>> {
        let sql = format!(
            "{OCCURRENCE_SELECT}
             WHERE cu.user_id = ?
               AND rs.scheduled_date BETWEEN ? AND ?
             ORDER BY rs.scheduled_date, rs.scheduled_time"
        );
        let occurrences = sqlx::query_as::<_, ReunionOccurrence>(&sql)
            .bind(user_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(self.db.pool())
            .await?;
        Ok(occurrences)
    }

    async fn create_schedule(
        &self,
        reunion_id: i64,
        scheduled_date: NaiveDate,
        scheduled_time: NaiveTime,
        duration_minutes: i64,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO reunion_schedules (reunion_id, scheduled_date, scheduled_time, duration_minutes)
             VALUES (?, ?, ?, ?)",
        )
        .bind(reunion_id)
        .bind(scheduled_date)
        .bind(scheduled_time)
        .bind(duration_minutes)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update_schedule(
        &self,
        schedule_id: i64,
        scheduled_date: NaiveDate,
        scheduled_time: NaiveTime,
        duration_minutes: i64,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE reunion_schedules
             SET scheduled_date = ?, scheduled_time = ?, duration_minutes = ?
             WHERE id = ?",
        )
        .bind(scheduled_date)
        .bind(scheduled_time)
        .bind(duration_minutes)
        .bind(schedule_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_schedule(&self, schedule_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reunion_schedules WHERE id = ?")
            .bind(schedule_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
