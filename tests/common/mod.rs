use std::sync::Arc;

use secrecy::SecretString;
use sqlx::sqlite::SqliteQueryResult;

use aula_server::{
    app_state::AppState, auth::password::hash_password, config::Config, db::Database,
};

pub const USER_PASSWORD: &str = "password123";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
        jwt_expiration_hours: 2,
        secure_cookies: false,
    }
}

pub async fn test_state() -> Arc<AppState> {
    let db = Database::connect_in_memory().await.unwrap();
    Arc::new(AppState::with_database(test_config(), db))
}

/// Ids of the seeded fixture rows.
pub struct Fixture {
    pub user_id: i64,
    pub outsider_id: i64,
    pub course_id: i64,
    pub lesson_id: i64,
    pub text_content_id: i64,
    pub video_content_id: i64,
    pub activity_content_id: i64,
    pub reunion_content_id: i64,
    pub reunion_id: i64,
    pub statement_ids: Vec<i64>,
    /// (correct, wrong) option ids per statement, same order as `statement_ids`.
    pub option_ids: Vec<(i64, i64)>,
    pub schedule_id: i64,
}

async fn exec(db: &Database, sql: &str, binds: &[&str]) -> SqliteQueryResult {
    let mut query = sqlx::query(sql);
    for bind in binds {
        query = query.bind(*bind);
    }
    query.execute(db.pool()).await.unwrap()
}

async fn add_content(db: &Database, lesson_id: i64, content_type: &str) -> i64 {
    sqlx::query("INSERT INTO lesson_contents (lesson_id, content_type) VALUES (?, ?)")
        .bind(lesson_id)
        .bind(content_type)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid()
}

/// One enrolled student, one outsider, a course with a single lesson carrying
/// all four content types, and two scheduled occurrences of the meeting.
pub async fn seed(db: &Database) -> Fixture {
    let user_id = exec(
        db,
        "INSERT INTO users (name, email, password_hash, phone_number, role, created_at)
         VALUES (?, ?, ?, NULL, 'student', 1735689600)",
        &["Ana Souza", "ana@example.com", &hash_password(USER_PASSWORD)],
    )
    .await
    .last_insert_rowid();

    let outsider_id = exec(
        db,
        "INSERT INTO users (name, email, password_hash, phone_number, role, created_at)
         VALUES (?, ?, ?, NULL, 'student', 1735689600)",
        &[
            "Bruno Lima",
            "bruno@example.com",
            &hash_password(USER_PASSWORD),
        ],
    )
    .await
    .last_insert_rowid();

    let course_id = exec(
        db,
        "INSERT INTO courses (name, description) VALUES (?, ?)",
        &["Lógica de Programação", "Fundamentos"],
    )
    .await
    .last_insert_rowid();

    let class_id = sqlx::query("INSERT INTO classes (course_id) VALUES (?)")
        .bind(course_id)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid();

    sqlx::query("INSERT INTO class_users (class_id, user_id) VALUES (?, ?)")
        .bind(class_id)
        .bind(user_id)
        .execute(db.pool())
        .await
        .unwrap();

    let lesson_id = sqlx::query(
        "INSERT INTO lessons (course_id, title, lesson_description, created_at)
         VALUES (?, 'Introdução', 'Primeira aula', 1735689600)",
    )
    .bind(course_id)
    .execute(db.pool())
    .await
    .unwrap()
    .last_insert_rowid();

    let text_content_id = add_content(db, lesson_id, "text").await;
    let video_content_id = add_content(db, lesson_id, "video").await;
    let activity_content_id = add_content(db, lesson_id, "activity").await;
    let reunion_content_id = add_content(db, lesson_id, "reunion").await;

    sqlx::query(
        "INSERT INTO lesson_texts (lesson_content_id, text_title, text_content, created_at)
         VALUES (?, 'Apostila', 'Conteúdo da apostila', 1735689600)",
    )
    .bind(text_content_id)
    .execute(db.pool())
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO lesson_videos (lesson_content_id, video_title, video_url, video_content, created_at)
         VALUES (?, 'Aula em vídeo', 'https://www.youtube.com/watch?v=dQw4w9WgXcQ', NULL, 1735689600)",
    )
    .bind(video_content_id)
    .execute(db.pool())
    .await
    .unwrap();

    let reunion_id = sqlx::query(
        "INSERT INTO lesson_reunions (lesson_content_id, reunion_title, reunion_description, reunion_url, created_at)
         VALUES (?, 'Plantão de dúvidas', 'Encontro semanal', 'https://meet.example.com/abc', 1735689600)",
    )
    .bind(reunion_content_id)
    .execute(db.pool())
    .await
    .unwrap()
    .last_insert_rowid();

    let schedule_id = sqlx::query(
        "INSERT INTO reunion_schedules (reunion_id, scheduled_date, scheduled_time, duration_minutes)
         VALUES (?, '2025-03-15', '10:00:00', 60)",
    )
    .bind(reunion_id)
    .execute(db.pool())
    .await
    .unwrap()
    .last_insert_rowid();

    sqlx::query(
        "INSERT INTO reunion_schedules (reunion_id, scheduled_date, scheduled_time, duration_minutes)
         VALUES (?, '2025-03-20', '19:30:00', 90)",
    )
    .bind(reunion_id)
    .execute(db.pool())
    .await
    .unwrap();

    let mut statement_ids = Vec::new();
    let mut option_ids = Vec::new();
    for (order, text) in [(1, "Quanto é 1 + 1?"), (2, "Quanto é 2 + 2?")] {
        let statement_id = sqlx::query(
            "INSERT INTO activity_statements (lesson_content_id, question_order, statement_text)
             VALUES (?, ?, ?)",
        )
        .bind(activity_content_id)
        .bind(order)
        .bind(text)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid();

        let correct = sqlx::query(
            "INSERT INTO activity_options (statement_id, option_order, option_text, is_correct)
             VALUES (?, 1, 'Resposta certa', 1)",
        )
        .bind(statement_id)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid();

        let wrong = sqlx::query(
            "INSERT INTO activity_options (statement_id, option_order, option_text, is_correct)
             VALUES (?, 2, 'Resposta errada', 0)",
        )
        .bind(statement_id)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid();

        statement_ids.push(statement_id);
        option_ids.push((correct, wrong));
    }

    Fixture {
        user_id,
        outsider_id,
        course_id,
        lesson_id,
        text_content_id,
        video_content_id,
        activity_content_id,
        reunion_content_id,
        reunion_id,
        statement_ids,
        option_ids,
        schedule_id,
    }
}
