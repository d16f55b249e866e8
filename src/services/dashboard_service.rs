use std::sync::Arc;

use chrono::Local;
use futures::future::try_join_all;
use futures::try_join;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::CourseRow,
        dto::response::{
            ContentCounts, CourseProgress, DashboardCourse, DashboardResponse, DashboardStats,
        },
    },
    repositories::DashboardRepository,
};

pub struct DashboardService {
    dashboard: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(dashboard: Arc<dyn DashboardRepository>) -> Self {
        Self { dashboard }
    }

    /// Aggregates the whole landing-page payload. Per-course metrics and the
    /// cross-course aggregates are independent queries, so they run
    /// concurrently over the pool.
    pub async fn build(&self, user_id: i64) -> AppResult<DashboardResponse> {
        let user = self
            .dashboard
            .user_info(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".into()))?;

        let course_rows = self.dashboard.user_courses(user_id).await?;
        let now = Local::now();
        let today = now.date_naive();
        let time = now.time();

        let course_futures = course_rows
            .into_iter()
            .map(|course| self.course_detail(course, user_id));

        let (courses, pending_activities, completed, total, upcoming_reunions, past_reunions) = try_join!(
            try_join_all(course_futures),
            self.dashboard.pending_activities(user_id),
            self.dashboard.total_completed_activities(user_id),
            self.dashboard.total_activities(user_id),
            self.dashboard.upcoming_reunions(user_id, today, time),
            self.dashboard.past_reunions(user_id, today, time),
        )?;

        let stats = DashboardStats {
            completed_activities: completed,
            pending_activities: pending_activities.len() as i64,
            total_activities: total,
            overall_progress: percentage(completed, total),
        };

        Ok(DashboardResponse {
            user,
            courses,
            pending_activities,
            upcoming_reunions,
            past_reunions,
            stats,
        })
    }

    async fn course_detail(&self, course: CourseRow, user_id: i64) -> AppResult<DashboardCourse> {
        let (lessons, total_activities, completed_activities, total_contents, type_counts) = try_join!(
            self.dashboard.course_lessons(course.id),
            self.dashboard.course_total_activities(course.id),
            self.dashboard.course_completed_activities(course.id, user_id),
            self.dashboard.course_total_contents(course.id),
            self.dashboard.course_content_counts(course.id),
        )?;

        let mut content_counts = ContentCounts::default();
        for row in type_counts {
            match row.content_type.as_str() {
                "video" => content_counts.videos = row.count,
                "text" => content_counts.texts = row.count,
                "activity" => content_counts.activities = row.count,
                "reunion" => content_counts.reunions = row.count,
                _ => {}
            }
        }

        Ok(DashboardCourse {
            course,
            lessons,
            progress: CourseProgress {
                total_activities,
                completed_activities,
                progress_percentage: percentage(completed_activities, total_activities),
                total_contents,
                content_counts,
            },
        })
    }
}

fn percentage(completed: i64, total: i64) -> i64 {
    if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::percentage;

    #[test]
    fn test_percentage_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
    }

    #[test]
    fn test_percentage_of_empty_course_is_zero() {
        assert_eq!(percentage(0, 0), 0);
    }
}
