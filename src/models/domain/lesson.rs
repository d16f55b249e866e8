use serde::Serialize;

/// Lesson header joined with its course name, returned as the breadcrumb of
/// every typed content response and the lesson detail page.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LessonBreadcrumb {
    pub id: i64,
    pub title: String,
    pub lesson_description: Option<String>,
    pub course_id: i64,
    pub course_name: String,
}
