use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn statement_belongs_to_content(
        &self,
        statement_id: i64,
        content_id: i64,
    ) -> AppResult<bool>;

    /// `None` when the option does not belong to the statement.
    async fn option_correctness(
        &self,
        option_id: i64,
        statement_id: i64,
    ) -> AppResult<Option<bool>>;

    /// Records the user's choice for a statement, replacing any previous
    /// choice. Check and write happen inside one transaction so two
    /// concurrent submissions cannot leave duplicate rows.
    async fn upsert_answer(
        &self,
        user_id: i64,
        statement_id: i64,
        option_id: i64,
    ) -> AppResult<()>;

    async fn total_statements(&self, content_id: i64) -> AppResult<i64>;

    async fn answered_statements(&self, content_id: i64, user_id: i64) -> AppResult<i64>;
}

pub struct SqliteActivityRepository {
    db: Database,
}

impl SqliteActivityRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl ActivityRepository for SqliteActivityRepository {
    async fn statement_belongs_to_content(
        &self,
        statement_id: i64,
        content_id: i64,
    ) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM activity_statements WHERE id = ? AND lesson_content_id = ?",
        )
        .bind(statement_id)
        .bind(content_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.is_some())
    }

    async fn option_correctness(
        &self,
        option_id: i64,
        statement_id: i64,
    ) -> AppResult<Option<bool>> {
        let row: Option<(bool,)> = sqlx::query_as(
            "SELECT is_correct FROM activity_options WHERE id = ? AND statement_id = ?",
        )
        .bind(option_id)
        .bind(statement_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|(is_correct,)| is_correct))
    }

    async fn upsert_answer(
        &self,
        user_id: i64,
        statement_id: i64,
        option_id: i64,
    ) -> AppResult<()> {
        let mut tx = self.db.pool().begin().await?;

        let existing: Option<(i64,)> = sqlx::query_as(
            "SELECT sa.id
             FROM student_answers sa
             JOIN activity_options ao ON sa.option_id = ao.id
             WHERE ao.statement_id = ? AND sa.user_id = ?",
        )
        .bind(statement_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        match existing {
            Some((answer_id,)) => {
                sqlx::query("UPDATE student_answers SET option_id = ? WHERE id = ?")
                    .bind(option_id)
                    .bind(answer_id)
                    .execute(&mut *tx)
                    .await?;
            }
            None => {
                sqlx::query("INSERT INTO student_answers (option_id, user_id) VALUES (?, ?)")
                    .bind(option_id)
                    .bind(user_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn total_statements(&self, content_id: i64) -> AppResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM activity_statements WHERE lesson_content_id = ?")
                .bind(content_id)
                .fetch_one(self.db.pool())
                .await?;
        Ok(count)
    }

    async fn answered_statements(&self, content_id: i64, user_id: i64) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT ast.id)
             FROM activity_statements ast
             JOIN activity_options ao ON ast.id = ao.statement_id
             JOIN student_answers sa ON ao.id = sa.option_id
             WHERE ast.lesson_content_id = ? AND sa.user_id = ?",
        )
        .bind(content_id)
        .bind(user_id)
        .fetch_one(self.db.pool())
        .await?;
        Ok(count)
    }
}
