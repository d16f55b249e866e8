use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ActivityStatement {
    pub id: i64,
    pub lesson_content_id: i64,
    pub question_order: i64,
    pub statement_text: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ActivityOption {
    pub id: i64,
    pub statement_id: i64,
    pub option_order: i64,
    pub option_text: String,
    pub is_correct: bool,
}

/// A statement with its ordered options, as delivered to the activity page.
#[derive(Debug, Clone, Serialize)]
pub struct StatementWithOptions {
    #[serde(flatten)]
    pub statement: ActivityStatement,
    pub options: Vec<ActivityOption>,
}

/// The option a user last selected for a statement. At most one exists per
/// (user, statement); the recorder upserts on that logical key.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserAnswer {
    pub statement_id: i64,
    pub option_id: i64,
}
