mod common;

use chrono::{NaiveDate, NaiveTime};

use aula_server::{
    errors::AppError,
    models::dto::request::{CreateScheduleRequest, ReunionListQuery, UpdateScheduleRequest},
};

fn march_query() -> ReunionListQuery {
    ReunionListQuery {
        month: Some(3),
        year: Some(2025),
        start_date: None,
        end_date: None,
    }
}

#[actix_web::test]
async fn month_filter_lists_chronologically() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let res = state.reunion.list(fx.user_id, march_query()).await.unwrap();
    assert_eq!(res.month, 3);
    assert_eq!(res.year, 2025);
    assert_eq!(res.reunions.len(), 2);
    assert!(res.reunions[0].scheduled_date <= res.reunions[1].scheduled_date);

    let empty = state
        .reunion
        .list(
            fx.user_id,
            ReunionListQuery {
                month: Some(4),
                year: Some(2025),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(empty.reunions.is_empty());
}

#[actix_web::test]
async fn date_range_wins_over_month() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let res = state
        .reunion
        .list(
            fx.user_id,
            ReunionListQuery {
                month: Some(4),
                year: Some(2025),
                start_date: NaiveDate::from_ymd_opt(2025, 3, 14),
                end_date: NaiveDate::from_ymd_opt(2025, 3, 16),
            },
        )
        .await
        .unwrap();
    assert_eq!(res.reunions.len(), 1);
    assert_eq!(
        res.reunions[0].scheduled_date,
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    );
}

#[actix_web::test]
async fn outsider_sees_no_occurrences() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let res = state
        .reunion
        .list(fx.outsider_id, march_query())
        .await
        .unwrap();
    assert!(res.reunions.is_empty());
}

#[actix_web::test]
async fn create_then_list_round_trip() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let id = state
        .reunion
        .create(
            fx.user_id,
            CreateScheduleRequest {
                reunion_id: fx.reunion_id,
                scheduled_date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
                scheduled_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                duration_minutes: 45,
            },
        )
        .await
        .unwrap();
    assert!(id > 0);

    let res = state.reunion.list(fx.user_id, march_query()).await.unwrap();
    assert_eq!(res.reunions.len(), 3);
}

#[actix_web::test]
async fn outsider_cannot_schedule_or_touch() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let err = state
        .reunion
        .create(
            fx.outsider_id,
            CreateScheduleRequest {
                reunion_id: fx.reunion_id,
                scheduled_date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
                scheduled_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                duration_minutes: 45,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = state
        .reunion
        .delete(fx.outsider_id, fx.schedule_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[actix_web::test]
async fn update_and_delete_schedule() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    state
        .reunion
        .update(
            fx.user_id,
            UpdateScheduleRequest {
                id: fx.schedule_id,
                scheduled_date: NaiveDate::from_ymd_opt(2025, 3, 16).unwrap(),
                scheduled_time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
                duration_minutes: 30,
            },
        )
        .await
        .unwrap();

    let res = state.reunion.list(fx.user_id, march_query()).await.unwrap();
    assert!(res
        .reunions
        .iter()
        .any(|r| r.scheduled_date == NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()));

    state.reunion.delete(fx.user_id, fx.schedule_id).await.unwrap();
    let res = state.reunion.list(fx.user_id, march_query()).await.unwrap();
    assert_eq!(res.reunions.len(), 1);
}

#[actix_web::test]
async fn unknown_schedule_reads_as_forbidden() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let err = state.reunion.delete(fx.user_id, 9999).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}
