pub mod activity;
pub mod content;
pub mod dashboard;
pub mod lesson;
pub mod reset_token;
pub mod reunion;
pub mod user;

pub use activity::{ActivityOption, ActivityStatement, StatementWithOptions, UserAnswer};
pub use content::{ContentInfo, ContentListItem, ContentType, TextContent, VideoContent};
pub use dashboard::{
    ContentTypeCount, CourseRow, DashboardReunion, LessonSummary, PendingActivity,
};
pub use lesson::LessonBreadcrumb;
pub use reset_token::PwdResetToken;
pub use reunion::{ReunionContent, ReunionOccurrence, ReunionSchedule};
pub use user::{User, UserInfo, UserProfile, UserRole};
