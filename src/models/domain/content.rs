use serde::{Deserialize, Serialize};

/// Discriminant of a lesson content item. Each content instance has exactly
/// one type for its lifetime; the detail row lives in the matching
/// `lesson_*` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Video,
    Activity,
    Reunion,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Video => "video",
            ContentType::Activity => "activity",
            ContentType::Reunion => "reunion",
        }
    }
}

/// Minimal shape returned by the type-resolution endpoint so the client can
/// redirect to the matching typed route.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContentInfo {
    pub id: i64,
    pub lesson_id: i64,
    pub content_type: ContentType,
}

/// One row of a lesson's content listing, with a short excerpt and the
/// per-item completion flag.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContentListItem {
    pub id: i64,
    pub lesson_id: i64,
    pub content_type: ContentType,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TextContent {
    pub id: i64,
    pub lesson_content_id: i64,
    pub text_title: String,
    pub text_content: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct VideoContent {
    pub id: i64,
    pub lesson_content_id: i64,
    pub video_title: String,
    pub video_url: String,
    pub video_content: Option<String>,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ContentType::Text).unwrap(), "\"text\"");
        assert_eq!(
            serde_json::to_string(&ContentType::Reunion).unwrap(),
            "\"reunion\""
        );
    }

    #[test]
    fn test_as_str_matches_serde() {
        for ct in [
            ContentType::Text,
            ContentType::Video,
            ContentType::Activity,
            ContentType::Reunion,
        ] {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.as_str()));
        }
    }
}
