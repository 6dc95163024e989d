//! Public science article reads.

use reqwest::Method;

use crate::api::query::{DEFAULT_PAGE, DEFAULT_SIZE};
use crate::api::{ApiClient, ApiError, ApiResult, QueryPairs};
use crate::models::{Article, ArticleStatistics, Page};

/// Query parameters for the article list.
#[derive(Debug, Clone)]
pub struct ArticleQuery {
    pub page: u32,
    pub size: u32,
    pub keyword: String,
    pub author_account: String,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            keyword: String::new(),
            author_account: String::new(),
        }
    }
}

impl ArticleQuery {
    pub(crate) fn to_pairs(&self) -> QueryPairs {
        QueryPairs::paged(self.page, self.size)
            .filter("keyword", &self.keyword)
            .filter("author_account", &self.author_account)
    }
}

/// Read-only client for `/api/public/science/articles`.
#[derive(Clone)]
pub struct ArticleService {
    api: ApiClient,
}

impl ArticleService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &ArticleQuery) -> ApiResult<Page<Article>> {
        let request = self
            .api
            .request(Method::GET, "/api/public/science/articles")
            .query(query.to_pairs().as_pairs());
        self.api.execute(request).await
    }

    pub async fn detail(&self, article_id: i64) -> ApiResult<Article> {
        if article_id <= 0 {
            return Err(ApiError::validation("invalid article id"));
        }
        let request = self.api.request(
            Method::GET,
            &format!("/api/public/science/articles/{}", article_id),
        );
        self.api.execute(request).await
    }

    pub async fn statistics(&self) -> ApiResult<ArticleStatistics> {
        let request = self
            .api
            .request(Method::GET, "/api/public/science/articles/statistics");
        self.api.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_keyword_and_omits_absent_filters() {
        let query = ArticleQuery {
            page: 1,
            size: 5,
            keyword: "  science  ".to_string(),
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert_eq!(
            pairs.as_pairs(),
            &[
                ("page", "1".to_string()),
                ("size", "5".to_string()),
                ("keyword", "science".to_string()),
            ]
        );
    }

    #[test]
    fn query_defaults_to_first_page_of_ten() {
        let pairs = ArticleQuery::default().to_pairs();
        assert_eq!(
            pairs.as_pairs(),
            &[("page", "1".to_string()), ("size", "10".to_string())]
        );
    }
}
