use async_trait::async_trait;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{
        ActivityOption, ActivityStatement, ContentInfo, ContentListItem, LessonBreadcrumb,
        ReunionContent, ReunionSchedule, TextContent, UserAnswer, VideoContent,
    },
};

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn lesson_breadcrumb(&self, lesson_id: i64) -> AppResult<Option<LessonBreadcrumb>>;
    async fn content_info(&self, content_id: i64) -> AppResult<Option<ContentInfo>>;

    /// All contents of a lesson with excerpt and per-item completion flag for
    /// the given user (an activity counts as completed once it has at least
    /// one recorded answer).
    async fn content_list(&self, user_id: i64, lesson_id: i64) -> AppResult<Vec<ContentListItem>>;

    async fn text_detail(&self, content_id: i64) -> AppResult<Option<TextContent>>;
    async fn video_detail(&self, content_id: i64) -> AppResult<Option<VideoContent>>;
    async fn reunion_detail(&self, content_id: i64) -> AppResult<Option<ReunionContent>>;
    async fn reunion_schedule(&self, reunion_id: i64) -> AppResult<Vec<ReunionSchedule>>;

    /// Statements ordered by `question_order`.
    async fn statements(&self, content_id: i64) -> AppResult<Vec<ActivityStatement>>;

    /// All options of an activity's statements, ordered by statement then
    /// `option_order`, grouped by the caller.
    async fn options_for_content(&self, content_id: i64) -> AppResult<Vec<ActivityOption>>;

    async fn user_answers(&self, content_id: i64, user_id: i64) -> AppResult<Vec<UserAnswer>>;
}

pub struct SqliteContentRepository {
    db: Database,
}

impl SqliteContentRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl ContentRepository for SqliteContentRepository {
    async fn lesson_breadcrumb(&self, lesson_id: i64) -> AppResult<Option<LessonBreadcrumb>> {
        let lesson = sqlx::query_as::<_, LessonBreadcrumb>(
            "SELECT l.id, l.title, l.lesson_description, l.course_id, c.name AS course_name
             FROM lessons l
             JOIN courses c ON l.course_id = c.id
             WHERE l.id = ?",
        )
        .bind(lesson_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(lesson)
    }

    async fn content_info(&self, content_id: i64) -> AppResult<Option<ContentInfo>> {
        let info = sqlx::query_as::<_, ContentInfo>(
            "SELECT id, lesson_id, content_type FROM lesson_contents WHERE id = ?",
        )
        .bind(content_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(info)
    }

    async fn content_list(&self, user_id: i64, lesson_id: i64) -> AppResult<Vec<ContentListItem>> {
        let items = sqlx::query_as::<_, ContentListItem>(
            "SELECT
                lc.id,
                lc.lesson_id,
                lc.content_type,
                CASE
                    WHEN lc.content_type = 'text' THEN lt.text_title
                    WHEN lc.content_type = 'video' THEN lv.video_title
                    WHEN lc.content_type = 'activity' THEN 'Atividade ' || lc.id
                    WHEN lc.content_type = 'reunion' THEN lr.reunion_title
                END AS title,
                CASE
                    WHEN lc.content_type = 'text' THEN SUBSTR(lt.text_content, 1, 150)
                    WHEN lc.content_type = 'video' THEN SUBSTR(lv.video_content, 1, 150)
                    WHEN lc.content_type = 'activity' THEN (
                        SELECT SUBSTR(statement_text, 1, 150)
                        FROM activity_statements
                        WHERE lesson_content_id = lc.id
                        ORDER BY question_order
                        LIMIT 1
                    )
                    WHEN lc.content_type = 'reunion' THEN SUBSTR(lr.reunion_description, 1, 150)
                END AS description,
                CASE
                    WHEN lc.content_type = 'activity' THEN (
                        SELECT COUNT(*) > 0
                        FROM activity_statements ast
                        JOIN activity_options ao ON ast.id = ao.statement_id
                        JOIN student_answers sa ON ao.id = sa.option_id
                        WHERE ast.lesson_content_id = lc.id
                          AND sa.user_id = ?
                    )
                    ELSE FALSE
                END AS completed
             FROM lesson_contents lc
             LEFT JOIN lesson_texts lt ON lc.id = lt.lesson_content_id AND lc.content_type = 'text'
             LEFT JOIN lesson_videos lv ON lc.id = lv.lesson_content_id AND lc.content_type = 'video'
             LEFT JOIN lesson_reunions lr ON lc.id = lr.lesson_content_id AND lc.content_type = 'reunion'
             WHERE lc.lesson_id = ?
             ORDER BY lc.id",
        )
        .bind(user_id)
        .bind(lesson_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(items)
    }

    async fn text_detail(&self, content_id: i64) -> AppResult<Option<TextContent>> {
        let content = sqlx::query_as::<_, TextContent>(
            "SELECT lt.id, lt.lesson_content_id, lt.text_title, lt.text_content, lt.created_at
             FROM lesson_texts lt
             JOIN lesson_contents lc ON lt.lesson_content_id = lc.id
             WHERE lc.id = ? AND lc.content_type = 'text'",
        )
        .bind(content_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(content)
    }

    async fn video_detail(&self, content_id: i64) -> AppResult<Option<VideoContent>> {
        let content = sqlx::query_as::<_, VideoContent>(
            "SELECT lv.id, lv.lesson_content_id, lv.video_title, lv.video_url,
                    lv.video_content, lv.created_at
             FROM lesson_videos lv
             JOIN lesson_contents lc ON lv.lesson_content_id = lc.id
             WHERE lc.id = ? AND lc.content_type = 'video'",
        )
        .bind(content_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(content)
    }

    async fn reunion_detail(&self, content_id: i64) -> AppResult<Option<ReunionContent>> {
        let content = sqlx::query_as::<_, ReunionContent>(
            "SELECT lr.id, lr.lesson_content_id, lr.reunion_title, lr.reunion_description,
                    lr.reunion_url, lr.created_at
             FROM lesson_reunions lr
             JOIN lesson_contents lc ON lr.lesson_content_id = lc.id
             WHERE lc.id = ? AND lc.content_type = 'reunion'",
        )
        .bind(content_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(content)
    }

    async fn reunion_schedule(&self, reunion_id: i64) -> AppResult<Vec<ReunionSchedule>> {
        let schedule = sqlx::query_as::<_, ReunionSchedule>(
            "SELECT id, reunion_id, scheduled_date, scheduled_time, duration_minutes
             FROM reunion_schedules
             WHERE reunion_id = ?
             ORDER BY scheduled_date, scheduled_time",
        )
        .bind(reunion_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(schedule)
    }

    async fn statements(&self, content_id: i64) -> AppResult<Vec<ActivityStatement>> {
        let statements = sqlx::query_as::<_, ActivityStatement>(
            "SELECT id, lesson_content_id, question_order, statement_text
             FROM activity_statements
             WHERE lesson_content_id = ?
             ORDER BY question_order",
        )
        .bind(content_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(statements)
    }

    async fn options_for_content(&self, content_id: i64) -> AppResult<Vec<ActivityOption>> {
        let options = sqlx::query_as::<_, ActivityOption>(
            "SELECT ao.id, ao.statement_id, ao.option_order, ao.option_text, ao.is_correct
             FROM activity_options ao
             JOIN activity_statements ast ON ao.statement_id = ast.id
             WHERE ast.lesson_content_id = ?
             ORDER BY ast.question_order, ao.option_order",
        )
        .bind(content_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(options)
    }

    async fn user_answers(&self, content_id: i64, user_id: i64) -> AppResult<Vec<UserAnswer>> {
        let answers = sqlx::query_as::<_, UserAnswer>(
            "SELECT ao.statement_id, sa.option_id
             FROM student_answers sa
             JOIN activity_options ao ON sa.option_id = ao.id
             JOIN activity_statements ast ON ao.statement_id = ast.id
             WHERE ast.lesson_content_id = ? AND sa.user_id = ?",
        )
        .bind(content_id)
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(answers)
    }
}
