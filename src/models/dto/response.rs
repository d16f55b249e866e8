use chrono::NaiveDate;
use serde::Serialize;

use crate::models::domain::{
    ContentInfo, ContentListItem, CourseRow, DashboardReunion, LessonBreadcrumb, LessonSummary,
    PendingActivity, ReunionContent, ReunionOccurrence, ReunionSchedule, StatementWithOptions,
    TextContent, UserAnswer, UserInfo, UserProfile, UserRole, VideoContent,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub message: String,
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
pub struct ContentTypeResponse {
    pub content: ContentInfo,
}

#[derive(Debug, Serialize)]
pub struct LessonDetailResponse {
    pub lesson: LessonBreadcrumb,
    pub contents: Vec<ContentListItem>,
}

#[derive(Debug, Serialize)]
pub struct TextContentResponse {
    pub lesson: LessonBreadcrumb,
    pub content: TextContent,
}

#[derive(Debug, Serialize)]
pub struct VideoPayload {
    #[serde(flatten)]
    pub video: VideoContent,
    pub embed_url: String,
}

#[derive(Debug, Serialize)]
pub struct VideoContentResponse {
    pub lesson: LessonBreadcrumb,
    pub content: VideoPayload,
}

#[derive(Debug, Serialize)]
pub struct ActivityContentResponse {
    pub lesson: LessonBreadcrumb,
    pub statements: Vec<StatementWithOptions>,
    #[serde(rename = "userAnswers")]
    pub user_answers: Vec<UserAnswer>,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ReunionPayload {
    #[serde(flatten)]
    pub reunion: ReunionContent,
    pub schedule: Vec<ReunionSchedule>,
}

#[derive(Debug, Serialize)]
pub struct ReunionContentResponse {
    pub lesson: LessonBreadcrumb,
    pub content: ReunionPayload,
}

/// Typed payload produced by the single content-delivery dispatch.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ContentPayload {
    Text(TextContentResponse),
    Video(VideoContentResponse),
    Activity(ActivityContentResponse),
    Reunion(ReunionContentResponse),
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdateResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ScheduleCreatedResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ReunionListResponse {
    pub reunions: Vec<ReunionOccurrence>,
    pub month: u32,
    pub year: i32,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Serialize)]
pub struct ContentCounts {
    pub videos: i64,
    pub texts: i64,
    pub activities: i64,
    pub reunions: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub total_activities: i64,
    pub completed_activities: i64,
    pub progress_percentage: i64,
    pub total_contents: i64,
    pub content_counts: ContentCounts,
}

#[derive(Debug, Serialize)]
pub struct DashboardCourse {
    #[serde(flatten)]
    pub course: CourseRow,
    pub lessons: Vec<LessonSummary>,
    pub progress: CourseProgress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub completed_activities: i64,
    pub pending_activities: i64,
    pub total_activities: i64,
    pub overall_progress: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserInfo,
    pub courses: Vec<DashboardCourse>,
    #[serde(rename = "pendingActivities")]
    pub pending_activities: Vec<PendingActivity>,
    #[serde(rename = "upcomingReunions")]
    pub upcoming_reunions: Vec<DashboardReunion>,
    #[serde(rename = "pastReunions")]
    pub past_reunions: Vec<DashboardReunion>,
    pub stats: DashboardStats,
}
