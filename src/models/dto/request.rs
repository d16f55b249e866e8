use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub statement_id: i64,
    pub option_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Nome e email são obrigatórios"))]
    pub name: String,

    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,

    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmResetRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Unauthenticated reset-by-link flow: the mailed hash identifies the grant.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkResetRequest {
    pub hash: String,
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateCodeRequest {
    pub hash: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashQuery {
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    pub reunion_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScheduleRequest {
    pub id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDeleteQuery {
    pub id: Option<i64>,
}

/// Calendar filter: either an explicit date range or a month/year pair;
/// both absent means the current month.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReunionListQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}
