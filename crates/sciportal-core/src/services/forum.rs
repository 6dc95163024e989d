//! Forum reads and authenticated post operations.

use reqwest::Method;

use crate::api::query::{DEFAULT_PAGE, DEFAULT_SIZE};
use crate::api::{ApiClient, ApiError, ApiResult, QueryPairs};
use crate::auth::Session;
use crate::models::{ForumPost, NewPost, Page};

/// Query parameters for the post list. The keyword travels as `q` on the
/// wire.
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub page: u32,
    pub size: u32,
    pub category: String,
    pub keyword: String,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            category: String::new(),
            keyword: String::new(),
        }
    }
}

impl PostQuery {
    pub(crate) fn to_pairs(&self) -> QueryPairs {
        QueryPairs::paged(self.page, self.size)
            .filter("category", &self.category)
            .filter("q", &self.keyword)
    }
}

/// Client for `/api/forum/posts`. Reads are public; creating and liking
/// require a logged-in session and are refused locally without one.
#[derive(Clone)]
pub struct ForumService {
    api: ApiClient,
}

impl ForumService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &PostQuery) -> ApiResult<Page<ForumPost>> {
        let request = self
            .api
            .request(Method::GET, "/api/forum/posts")
            .query(query.to_pairs().as_pairs());
        self.api.execute(request).await
    }

    pub async fn detail(&self, post_id: i64) -> ApiResult<ForumPost> {
        if post_id <= 0 {
            return Err(ApiError::validation("invalid post id"));
        }
        let request = self
            .api
            .request(Method::GET, &format!("/api/forum/posts/{}", post_id));
        self.api.execute(request).await
    }

    /// `POST /api/forum/posts`. The response shape varies by backend
    /// version, so the created record is returned as raw JSON.
    pub async fn create(&self, session: &Session, post: &NewPost) -> ApiResult<serde_json::Value> {
        if !session.is_authenticated() {
            return Err(ApiError::validation("please log in first"));
        }
        let request = self
            .api
            .authed(Method::POST, "/api/forum/posts", session)
            .json(post);
        self.api.execute(request).await
    }

    /// `POST /api/forum/posts/{id}/like`.
    pub async fn like(&self, session: &Session, post_id: i64) -> ApiResult<()> {
        if !session.is_authenticated() {
            return Err(ApiError::validation("please log in first"));
        }
        if post_id <= 0 {
            return Err(ApiError::validation("invalid post id"));
        }
        let request = self
            .api
            .authed(Method::POST, &format!("/api/forum/posts/{}/like", post_id), session);
        self.api.execute_empty(request).await
    }
}
