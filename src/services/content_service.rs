use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ContentType, StatementWithOptions},
        dto::response::{
            ActivityContentResponse, ContentPayload, ContentTypeResponse, LessonDetailResponse,
            ReunionContentResponse, ReunionPayload, TextContentResponse, VideoContentResponse,
            VideoPayload,
        },
    },
    repositories::{AccessRepository, ContentRepository},
};

static DRIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"drive\.google\.com/file/d/([a-zA-Z0-9_-]+)").unwrap());
static YOUTUBE_LIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/live/([a-zA-Z0-9_-]{11})").unwrap());
static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .unwrap()
});

/// Rewrites a stored video URL into an embeddable player URL. Google Drive
/// share links become `/preview`, any recognized YouTube form becomes
/// `/embed/{id}`, anything else passes through untouched.
pub fn video_embed_url(url: &str) -> String {
    if let Some(caps) = DRIVE_RE.captures(url) {
        return format!("https://drive.google.com/file/d/{}/preview", &caps[1]);
    }
    if let Some(caps) = YOUTUBE_LIVE_RE.captures(url) {
        return format!("https://www.youtube.com/embed/{}", &caps[1]);
    }
    if let Some(caps) = YOUTUBE_RE.captures(url) {
        return format!("https://www.youtube.com/embed/{}", &caps[1]);
    }
    url.to_string()
}

pub struct ContentService {
    access: Arc<dyn AccessRepository>,
    contents: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(access: Arc<dyn AccessRepository>, contents: Arc<dyn ContentRepository>) -> Self {
        Self { access, contents }
    }

    /// Lesson header plus its content listing with per-item completion.
    pub async fn lesson_detail(
        &self,
        user_id: i64,
        lesson_id: i64,
    ) -> AppResult<LessonDetailResponse> {
        if !self.access.can_access_lesson(user_id, lesson_id).await? {
            return Err(AppError::Forbidden(
                "Você não tem acesso a esta aula".into(),
            ));
        }

        let lesson = self
            .contents
            .lesson_breadcrumb(lesson_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aula não encontrada".into()))?;
        let contents = self.contents.content_list(user_id, lesson_id).await?;

        Ok(LessonDetailResponse { lesson, contents })
    }

    /// Resolves the discriminant so the client can redirect to the typed route.
    pub async fn content_type_of(
        &self,
        user_id: i64,
        lesson_id: i64,
        content_id: i64,
    ) -> AppResult<ContentTypeResponse> {
        if !self
            .access
            .can_access_content(user_id, lesson_id, content_id, None)
            .await?
        {
            return Err(AppError::Forbidden(
                "Você não tem acesso a este conteúdo".into(),
            ));
        }

        let content = self
            .contents
            .content_info(content_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conteúdo não encontrado".into()))?;

        Ok(ContentTypeResponse { content })
    }

    /// Single dispatch for the typed content routes. The access check carries
    /// the expected discriminant so a wrong-typed id reads as no access.
    pub async fn fetch(
        &self,
        user_id: i64,
        lesson_id: i64,
        content_id: i64,
        content_type: ContentType,
    ) -> AppResult<ContentPayload> {
        if !self
            .access
            .can_access_content(user_id, lesson_id, content_id, Some(content_type))
            .await?
        {
            return Err(AppError::Forbidden(forbidden_message(content_type).into()));
        }

        let lesson = self
            .contents
            .lesson_breadcrumb(lesson_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aula não encontrada".into()))?;

        match content_type {
            ContentType::Text => {
                let content = self
                    .contents
                    .text_detail(content_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound("Conteúdo de texto não encontrado".into())
                    })?;
                Ok(ContentPayload::Text(TextContentResponse { lesson, content }))
            }
            ContentType::Video => {
                let video = self
                    .contents
                    .video_detail(content_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound("Conteúdo de vídeo não encontrado".into())
                    })?;
                let embed_url = video_embed_url(&video.video_url);
                Ok(ContentPayload::Video(VideoContentResponse {
                    lesson,
                    content: VideoPayload { video, embed_url },
                }))
            }
            ContentType::Activity => {
                let statements = self.contents.statements(content_id).await?;
                if statements.is_empty() {
                    return Err(AppError::NotFound(
                        "Atividade não encontrada ou sem enunciados".into(),
                    ));
                }

                let options = self.contents.options_for_content(content_id).await?;
                let mut by_statement: HashMap<i64, Vec<_>> = HashMap::new();
                for option in options {
                    by_statement.entry(option.statement_id).or_default().push(option);
                }

                let user_answers = self.contents.user_answers(content_id, user_id).await?;
                let completed = user_answers.len() >= statements.len();

                let statements = statements
                    .into_iter()
                    .map(|statement| {
                        let options = by_statement.remove(&statement.id).unwrap_or_default();
                        StatementWithOptions { statement, options }
                    })
                    .collect();

                Ok(ContentPayload::Activity(ActivityContentResponse {
                    lesson,
                    statements,
                    user_answers,
                    completed,
                }))
            }
            ContentType::Reunion => {
                let reunion = self
                    .contents
                    .reunion_detail(content_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound("Conteúdo de reunião não encontrado".into())
                    })?;
                let schedule = self.contents.reunion_schedule(reunion.id).await?;
                Ok(ContentPayload::Reunion(ReunionContentResponse {
                    lesson,
                    content: ReunionPayload { reunion, schedule },
                }))
            }
        }
    }
}

fn forbidden_message(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Text => "Você não tem acesso a este conteúdo ou o tipo de conteúdo não é texto",
        ContentType::Video => {
            "Você não tem acesso a este conteúdo ou o tipo de conteúdo não é vídeo"
        }
        ContentType::Activity => {
            "Você não tem acesso a este conteúdo ou o tipo de conteúdo não é atividade"
        }
        ContentType::Reunion => {
            "Você não tem acesso a este conteúdo ou o tipo de conteúdo não é reunião"
        }
    }
}
