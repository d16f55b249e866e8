use std::sync::Arc;

use chrono::{Datelike, Local};

use crate::{
    errors::{AppError, AppResult},
    models::dto::{
        request::{CreateScheduleRequest, ReunionListQuery, UpdateScheduleRequest},
        response::ReunionListResponse,
    },
    repositories::{AccessRepository, ReunionRepository},
};

pub struct ReunionService {
    access: Arc<dyn AccessRepository>,
    reunions: Arc<dyn ReunionRepository>,
}

impl ReunionService {
    pub fn new(access: Arc<dyn AccessRepository>, reunions: Arc<dyn ReunionRepository>) -> Self {
        Self { access, reunions }
    }

    /// Calendar listing. An explicit date range wins over month/year; with
    /// neither, the current local month is used.
    pub async fn list(
        &self,
        user_id: i64,
        query: ReunionListQuery,
    ) -> AppResult<ReunionListResponse> {
        let now = Local::now().date_naive();
        let month = query.month.unwrap_or_else(|| now.month());
        let year = query.year.unwrap_or_else(|| now.year());

        let reunions = match (query.start_date, query.end_date) {
            (Some(start), Some(end)) => {
                self.reunions
                    .occurrences_in_range(user_id, start, end)
                    .await?
            }
            _ => {
                self.reunions
                    .occurrences_in_month(user_id, month, year)
                    .await?
            }
        };

        Ok(ReunionListResponse {
            reunions,
            month,
            year,
            start_date: query.start_date,
            end_date: query.end_date,
        })
    }

    pub async fn create(&self, user_id: i64, req: CreateScheduleRequest) -> AppResult<i64> {
        if !self
            .access
            .can_access_reunion(user_id, req.reunion_id)
            .await?
        {
            return Err(AppError::Forbidden("Acesso negado a esta reunião".into()));
        }

        self.reunions
            .create_schedule(
                req.reunion_id,
                req.scheduled_date,
                req.scheduled_time,
                req.duration_minutes,
            )
            .await
    }

    pub async fn update(&self, user_id: i64, req: UpdateScheduleRequest) -> AppResult<()> {
        if !self.access.can_access_schedule(user_id, req.id).await? {
            return Err(AppError::Forbidden("Acesso negado a esta reunião".into()));
        }

        let updated = self
            .reunions
            .update_schedule(
                req.id,
                req.scheduled_date,
                req.scheduled_time,
                req.duration_minutes,
            )
            .await?;
        if !updated {
            return Err(AppError::NotFound("Reunião não encontrada".into()));
        }
        Ok(())
    }

    pub async fn delete(&self, user_id: i64, schedule_id: i64) -> AppResult<()> {
        if !self.access.can_access_schedule(user_id, schedule_id).await? {
            return Err(AppError::Forbidden("Acesso negado a esta reunião".into()));
        }

        let deleted = self.reunions.delete_schedule(schedule_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Reunião não encontrada".into()));
        }
        Ok(())
    }
}
