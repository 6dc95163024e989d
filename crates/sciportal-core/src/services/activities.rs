//! Public activity reads.

use reqwest::Method;

use crate::api::query::{DEFAULT_PAGE, DEFAULT_SIZE};
use crate::api::{ApiClient, ApiError, ApiResult, QueryPairs};
use crate::models::{Activity, ActivityStatistics, Page};

/// Query parameters for the activity list. Unlike the optional filters,
/// `status` is always sent; the platform only lists `published` activities
/// to anonymous callers.
#[derive(Debug, Clone)]
pub struct ActivityQuery {
    pub page: u32,
    pub size: u32,
    pub status: String,
    pub keyword: String,
    pub organizer_display: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            status: "published".to_string(),
            keyword: String::new(),
            organizer_display: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl ActivityQuery {
    pub(crate) fn to_pairs(&self) -> QueryPairs {
        QueryPairs::paged(self.page, self.size)
            .set("status", self.status.clone())
            .filter("keyword", &self.keyword)
            .filter("organizer_display", &self.organizer_display)
            .filter("start_date", &self.start_date)
            .filter("end_date", &self.end_date)
    }
}

/// Read-only client for `/api/public/activities/activities`.
#[derive(Clone)]
pub struct ActivityService {
    api: ApiClient,
}

impl ActivityService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &ActivityQuery) -> ApiResult<Page<Activity>> {
        let request = self
            .api
            .request(Method::GET, "/api/public/activities/activities")
            .query(query.to_pairs().as_pairs());
        self.api.execute(request).await
    }

    pub async fn detail(&self, activity_id: i64) -> ApiResult<Activity> {
        if activity_id <= 0 {
            return Err(ApiError::validation("invalid activity id"));
        }
        let request = self.api.request(
            Method::GET,
            &format!("/api/public/activities/activities/{}", activity_id),
        );
        self.api.execute(request).await
    }

    pub async fn statistics(&self) -> ApiResult<ActivityStatistics> {
        let request = self
            .api
            .request(Method::GET, "/api/public/activities/activities/statistics");
        self.api.execute(request).await
    }
}
