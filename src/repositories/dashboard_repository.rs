use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{
        ContentTypeCount, CourseRow, DashboardReunion, LessonSummary, PendingActivity, UserInfo,
    },
};

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn user_info(&self, user_id: i64) -> AppResult<Option<UserInfo>>;

    async fn user_courses(&self, user_id: i64) -> AppResult<Vec<CourseRow>>;

    /// Five newest lessons of a course.
    async fn course_lessons(&self, course_id: i64) -> AppResult<Vec<LessonSummary>>;

    async fn course_total_activities(&self, course_id: i64) -> AppResult<i64>;

    /// Activities of the course the user has answered at least one statement of.
    async fn course_completed_activities(&self, course_id: i64, user_id: i64) -> AppResult<i64>;

    async fn course_total_contents(&self, course_id: i64) -> AppResult<i64>;

    async fn course_content_counts(&self, course_id: i64) -> AppResult<Vec<ContentTypeCount>>;

    async fn total_completed_activities(&self, user_id: i64) -> AppResult<i64>;

    /// Activities in the user's courses with zero recorded answers, newest
    /// lessons first, ten at most.
    async fn pending_activities(&self, user_id: i64) -> AppResult<Vec<PendingActivity>>;

    async fn total_activities(&self, user_id: i64) -> AppResult<i64>;

    /// Next five occurrences at or after the given local date/time, soonest first.
    async fn upcoming_reunions(
        &self,
        user_id: i64,
        today: NaiveDate,
        now: NaiveTime,
    ) -> AppResult<Vec<DashboardReunion>>;

    /// Last three occurrences strictly before the given local date/time, most recent first.
    async fn past_reunions(
        &self,
        user_id: i64,
        today: NaiveDate,
        now: NaiveTime,
    ) -> AppResult<Vec<DashboardReunion>>;
}

pub struct SqliteDashboardRepository {
    db: Database,
}

impl SqliteDashboardRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

const DASHBOARD_REUNION_COLUMNS: &str = "rs.id,
    lr.reunion_title,
    lr.reunion_url,
    lr.reunion_description,
    rs.scheduled_date,
    rs.scheduled_time,
    rs.duration_minutes,
    l.id AS lesson_id,
    l.title AS lesson_title,
    c.id AS course_id,
    c.name AS course_name";

const DASHBOARD_REUNION_JOINS: &str = "FROM reunion_schedules rs
    JOIN lesson_reunions lr ON rs.reunion_id = lr.id
    JOIN lesson_contents lc ON lr.lesson_content_id = lc.id
    JOIN lessons l ON lc.lesson_id = l.id
    JOIN courses c ON l.course_id = c.id
    JOIN classes cl ON c.id = cl.course_id
    JOIN class_users cu ON cl.id = cu.class_id";

#[async_trait]
impl DashboardRepository for SqliteDashboardRepository {
    async fn user_info(&self, user_id: i64) -> AppResult<Option<UserInfo>> {
        let info =
            sqlx::query_as::<_, UserInfo>("SELECT id, name, email, role FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(info)
    }

    async fn user_courses(&self, user_id: i64) -> AppResult<Vec<CourseRow>> {
        let courses = sqlx::query_as::<_, CourseRow>(
            "SELECT DISTINCT c.id, c.name, c.description
             FROM courses c
             JOIN classes cl ON c.id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             WHERE cu.user_id = ?
             ORDER BY c.name",
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(courses)
    }

    async fn course_lessons(&self, course_id: i64) -> AppResult<Vec<LessonSummary>> {
        let lessons = sqlx::query_as::<_, LessonSummary>(
            "SELECT id, title, lesson_description
             FROM lessons
             WHERE course_id = ?
             ORDER BY created_at DESC
             LIMIT 5",
        )
        .bind(course_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(lessons)
    }

    async fn course_total_activities(&self, course_id: i64) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             WHERE l.course_id = ? AND lc.content_type = 'activity'",
        )
        .bind(course_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(count)
    }

    async fn course_completed_activities(&self, course_id: i64, user_id: i64) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT lc.id)
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             JOIN activity_statements ast ON lc.id = ast.lesson_content_id
             JOIN activity_options ao ON ast.id = ao.statement_id
             JOIN student_answers sa ON ao.id = sa.option_id
             WHERE l.course_id = ? AND lc.content_type = 'activity' AND sa.user_id = ?",
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(count)
    }

    async fn course_total_contents(&self, course_id: i64) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             WHERE l.course_id = ?",
        )
        .bind(course_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(count)
    }

    async fn course_content_counts(&self, course_id: i64) -> AppResult<Vec<ContentTypeCount>> {
        let counts = sqlx::query_as::<_, ContentTypeCount>(
            "SELECT lc.content_type, COUNT(*) AS count
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             WHERE l.course_id = ?
             GROUP BY lc.content_type",
        )
        .bind(course_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(counts)
    }

    async fn total_completed_activities(&self, user_id: i64) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT lc.id)
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             JOIN classes cl ON l.course_id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             JOIN activity_statements ast ON lc.id = ast.lesson_content_id
             JOIN activity_options ao ON ast.id = ao.statement_id
             JOIN student_answers sa ON ao.id = sa.option_id AND sa.user_id = cu.user_id
             WHERE cu.user_id = ? AND lc.content_type = 'activity'",
        )
        .bind(user_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(count)
    }

    async fn pending_activities(&self, user_id: i64) -> AppResult<Vec<PendingActivity>> {
        let pending = sqlx::query_as::<_, PendingActivity>(
            "SELECT
                lc.id AS content_id,
                lc.content_type,
                l.id AS lesson_id,
                l.title AS lesson_title,
                c.id AS course_id,
                c.name AS course_name,
                (SELECT COUNT(*)
                 FROM activity_statements
                 WHERE lesson_content_id = lc.id) AS statement_count,
                (SELECT statement_text
                 FROM activity_statements
                 WHERE lesson_content_id = lc.id
                 ORDER BY question_order
                 LIMIT 1) AS first_statement
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             JOIN courses c ON l.course_id = c.id
             JOIN classes cl ON c.id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             WHERE cu.user_id = ?
               AND lc.content_type = 'activity'
               AND NOT EXISTS (
                   SELECT 1
                   FROM activity_statements ast
                   JOIN activity_options ao ON ast.id = ao.statement_id
                   JOIN student_answers sa ON ao.id = sa.option_id
                   WHERE ast.lesson_content_id = lc.id AND sa.user_id = ?
               )
             ORDER BY l.created_at DESC
             LIMIT 10",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(pending)
    }

    async fn total_activities(&self, user_id: i64) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT lc.id)
             FROM lesson_contents lc
             JOIN lessons l ON lc.lesson_id = l.id
             JOIN classes cl ON l.course_id = cl.course_id
             JOIN class_users cu ON cl.id = cu.class_id
             WHERE cu.user_id = ? AND lc.content_type = 'activity'",
        )
        .bind(user_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(count)
    }

    async fn upcoming_reunions(
        &self,
        user_id: i64,
        today: NaiveDate,
        now: NaiveTime,
    ) -> AppResult<Vec<DashboardReunion>> {
        let sql = format!(
            "SELECT {DASHBOARD_REUNION_COLUMNS}
             {DASHBOARD_REUNION_JOINS}
             WHERE cu.user_id = ?
               AND (rs.scheduled_date > ?
                    OR (rs.scheduled_date = ? AND rs.scheduled_time >= ?))
             ORDER BY rs.scheduled_date, rs.scheduled_time
             LIMIT 5"
        );
        let reunions = sqlx::query_as::<_, DashboardReunion>(&sql)
            .bind(user_id)
            .bind(today)
            .bind(today)
            .bind(now)
            .fetch_all(self.db.pool())
            .await?;
        Ok(reunions)
    }

    async fn past_reunions(
        &self,
        user_id: i64,
        today: NaiveDate,
        now: NaiveTime,
    ) -> AppResult<Vec<DashboardReunion>> {
        let sql = format!(
            "SELECT {DASHBOARD_REUNION_COLUMNS}
             {DASHBOARD_REUNION_JOINS}
             WHERE cu.user_id = ?
               AND (rs.scheduled_date < ?
                    OR (rs.scheduled_date = ? AND rs.scheduled_time < ?))
             ORDER BY rs.scheduled_date DESC, rs.scheduled_time DESC
             LIMIT 3"
        );
        let reunions = sqlx::query_as::<_, DashboardReunion>(&sql)
            .bind(user_id)
            .bind(today)
            .bind(today)
            .bind(now)
            .fetch_all(self.db.pool())
            .await?;
        Ok(reunions)
    }
}
