//! Forum post models.

use serde::{Deserialize, Serialize};

/// A forum post. List responses carry a server-built `summary`; only the
/// detail endpoint returns the full `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub author_account: Option<String>,
    #[serde(default)]
    pub author_display: Option<String>,
    #[serde(default)]
    pub author_info: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating a post.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_item_with_summary() {
        let json = r#"{"id": 7, "title": "Telescope advice?", "category": "discussion",
                       "summary": "Looking for a first telescope...", "view_count": 55,
                       "like_count": 2, "comment_count": 9,
                       "author_display": "stargazer",
                       "author_info": {"username": "stargazer", "role_cn": "普通用户"},
                       "created_at": "2025-01-03T08:00:00Z"}"#;
        let post: ForumPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.comment_count, 9);
        assert!(post.content.is_none());
        assert_eq!(post.author_info.unwrap()["username"], "stargazer");
    }

    #[test]
    fn new_post_serializes_all_fields() {
        let post = NewPost {
            title: "title".to_string(),
            content: "content".to_string(),
            category: "discussion".to_string(),
            tags: vec!["rust".to_string()],
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["category"], "discussion");
        assert_eq!(value["tags"][0], "rust");
    }
}
