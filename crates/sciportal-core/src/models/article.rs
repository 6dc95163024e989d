//! Science article models.

use serde::{Deserialize, Serialize};

/// Preview length for article content, matching what the platform's own
/// frontend shows in list views.
const SUMMARY_LEN: usize = 100;

/// A published science article. List responses omit some fields the detail
/// endpoint includes, so everything beyond the identity is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub author_account: Option<String>,
    #[serde(default)]
    pub author_display: Option<String>,
    #[serde(default)]
    pub author_info: Option<serde_json::Value>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Article {
    /// Tag-stripped preview of the content. Uses the server-provided
    /// summary when the content itself was not returned.
    pub fn preview(&self) -> String {
        let source = self
            .content
            .as_deref()
            .or(self.summary.as_deref())
            .unwrap_or("");
        crate::utils::extract_summary(source, SUMMARY_LEN)
    }
}

/// Aggregate statistics for published articles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleStatistics {
    #[serde(default)]
    pub total_published: i64,
    #[serde(default)]
    pub total_likes: i64,
    #[serde(default)]
    pub total_views: i64,
    #[serde(default)]
    pub avg_likes: f64,
    #[serde(default)]
    pub avg_views: f64,
    #[serde(default)]
    pub recent_published_30days: i64,
}
