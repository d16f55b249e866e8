mod common;

use aula_server::{errors::AppError, models::domain::ContentType};

#[actix_web::test]
async fn enrolled_user_reaches_lesson_and_contents() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let detail = state
        .content
        .lesson_detail(fx.user_id, fx.lesson_id)
        .await
        .unwrap();
    assert_eq!(detail.lesson.id, fx.lesson_id);
    assert_eq!(detail.contents.len(), 4);

    let info = state
        .content
        .content_type_of(fx.user_id, fx.lesson_id, fx.text_content_id)
        .await
        .unwrap();
    assert_eq!(info.content.content_type, ContentType::Text);
}

#[actix_web::test]
async fn outsider_is_forbidden_everywhere() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let err = state
        .content
        .lesson_detail(fx.outsider_id, fx.lesson_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = state
        .content
        .content_type_of(fx.outsider_id, fx.lesson_id, fx.text_content_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = state
        .content
        .fetch(
            fx.outsider_id,
            fx.lesson_id,
            fx.activity_content_id,
            ContentType::Activity,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[actix_web::test]
async fn type_mismatch_reads_as_no_access() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    // A text id requested through the video route is forbidden, not 404.
    let err = state
        .content
        .fetch(
            fx.user_id,
            fx.lesson_id,
            fx.text_content_id,
            ContentType::Video,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[actix_web::test]
async fn typed_fetch_returns_each_payload() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    for (content_id, content_type) in [
        (fx.text_content_id, ContentType::Text),
        (fx.video_content_id, ContentType::Video),
        (fx.activity_content_id, ContentType::Activity),
        (fx.reunion_content_id, ContentType::Reunion),
    ] {
        state
            .content
            .fetch(fx.user_id, fx.lesson_id, content_id, content_type)
            .await
            .unwrap();
    }
}

#[actix_web::test]
async fn video_payload_carries_embed_url() {
    let state = common::test_state().await;
    let fx = common::seed(&state.db).await;

    let payload = state
        .content
        .fetch(
            fx.user_id,
            fx.lesson_id,
            fx.video_content_id,
            ContentType::Video,
        )
        .await
        .unwrap();

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json["content"]["embed_url"],
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    );
}
