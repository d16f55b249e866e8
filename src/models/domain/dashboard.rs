use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LessonSummary {
    pub id: i64,
    pub title: String,
    pub lesson_description: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContentTypeCount {
    pub content_type: String,
    pub count: i64,
}

/// An activity the user has not answered a single statement of.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PendingActivity {
    pub content_id: i64,
    pub content_type: String,
    pub lesson_id: i64,
    pub lesson_title: String,
    pub course_id: i64,
    pub course_name: String,
    pub statement_count: i64,
    pub first_statement: Option<String>,
}

/// Meeting entry on the dashboard (upcoming or past).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DashboardReunion {
    pub id: i64,
    pub reunion_title: String,
    pub reunion_url: String,
    pub reunion_description: Option<String>,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i64,
    pub lesson_id: i64,
    pub lesson_title: String,
    pub course_id: i64,
    pub course_name: String,
}
