use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReunionContent {
    pub id: i64,
    pub lesson_content_id: i64,
    pub reunion_title: String,
    pub reunion_description: Option<String>,
    pub reunion_url: String,
    pub created_at: i64,
}

/// One scheduled date/time instance of a recurring meeting resource.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReunionSchedule {
    pub id: i64,
    pub reunion_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i64,
}

/// Calendar row: an occurrence joined with its meeting resource, lesson and
/// course, as listed by `GET /reunions`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReunionOccurrence {
    pub id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i64,
    pub reunion_id: i64,
    pub reunion_title: String,
    pub reunion_description: Option<String>,
    pub reunion_url: String,
    pub lesson_content_id: i64,
    pub lesson_id: i64,
    pub lesson_title: String,
    pub course_id: i64,
    pub course_name: String,
}
