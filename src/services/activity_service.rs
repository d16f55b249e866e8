use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::ContentType, dto::response::AnswerResponse},
    repositories::{AccessRepository, ActivityRepository},
};

pub struct ActivityService {
    access: Arc<dyn AccessRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(access: Arc<dyn AccessRepository>, activities: Arc<dyn ActivityRepository>) -> Self {
        Self { access, activities }
    }

    /// Records the user's choice for one statement. Preconditions run in
    /// order: enrollment, statement ownership, option ownership. Re-answering
    /// a statement replaces the previous choice.
    pub async fn submit_answer(
        &self,
        user_id: i64,
        lesson_id: i64,
        content_id: i64,
        statement_id: i64,
        option_id: i64,
    ) -> AppResult<AnswerResponse> {
        if !self
            .access
            .can_access_content(user_id, lesson_id, content_id, Some(ContentType::Activity))
            .await?
        {
            return Err(AppError::Forbidden(
                "Você não tem acesso a esta atividade".into(),
            ));
        }

        if !self
            .activities
            .statement_belongs_to_content(statement_id, content_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "Enunciado inválido para esta atividade".into(),
            ));
        }

        let correct = self
            .activities
            .option_correctness(option_id, statement_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Opção inválida para este enunciado".into()))?;

        self.activities
            .upsert_answer(user_id, statement_id, option_id)
            .await?;

        let total = self.activities.total_statements(content_id).await?;
        let answered = self
            .activities
            .answered_statements(content_id, user_id)
            .await?;

        Ok(AnswerResponse {
            correct,
            completed: total == answered,
        })
    }
}
