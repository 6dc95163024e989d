//! Public list/detail endpoints: query emission, envelope unwrapping, and
//! failure collapse.

use sciportal_core::services::{
    ActivityQuery, ActivityService, ArticleQuery, ArticleService, ForumService, PostQuery,
};
use sciportal_core::{ApiClient, ApiError};
use wiremock::matchers::{any, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body(items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": "ok",
        "data": { "items": items, "total": 1, "page": 1, "size": 5 }
    })
}

#[tokio::test]
async fn article_list_emits_trimmed_query_and_omits_absent_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/science/articles"))
        .and(query_param("page", "1"))
        .and(query_param("size", "5"))
        .and(query_param("keyword", "science"))
        .and(query_param_is_missing("author_account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(serde_json::json!([
            { "id": 12, "title": "Why the sky is blue", "like_count": 4 }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let service = ArticleService::new(ApiClient::new(server.uri()).unwrap());
    let query = ArticleQuery {
        page: 1,
        size: 5,
        keyword: "  science  ".to_string(),
        ..Default::default()
    };
    let page = service.list(&query).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Why the sky is blue");
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn activity_list_always_sends_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/activities/activities"))
        .and(query_param("status", "published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let service = ActivityService::new(ApiClient::new(server.uri()).unwrap());
    let page = service.list(&ActivityQuery::default()).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn forum_list_sends_keyword_as_q() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forum/posts"))
        .and(query_param("q", "telescope"))
        .and(query_param_is_missing("keyword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(serde_json::json!([
            { "id": 7, "title": "Telescope advice?", "comment_count": 9 }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let service = ForumService::new(ApiClient::new(server.uri()).unwrap());
    let query = PostQuery {
        keyword: " telescope ".to_string(),
        ..Default::default()
    };
    let page = service.list(&query).await.unwrap();
    assert_eq!(page.items[0].comment_count, 9);
}

#[tokio::test]
async fn invalid_id_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = ArticleService::new(ApiClient::new(server.uri()).unwrap());
    let err = service.detail(0).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "invalid article id");
}

#[tokio::test]
async fn server_rejection_surfaces_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/science/articles/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "success": false,
            "message": "article does not exist",
            "data": null
        })))
        .mount(&server)
        .await;

    let service = ArticleService::new(ApiClient::new(server.uri()).unwrap());
    match service.detail(99).await.unwrap_err() {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, Some(404));
            assert_eq!(message, "article does not exist");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn plain_error_bodies_fall_back_to_the_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/science/articles/statistics"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let service = ArticleService::new(ApiClient::new(server.uri()).unwrap());
    match service.statistics().await.unwrap_err() {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, Some(502));
            assert_eq!(message, "HTTP error: 502");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn success_false_inside_2xx_is_still_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/activities/activities/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "statistics temporarily unavailable",
            "data": null
        })))
        .mount(&server)
        .await;

    let service = ActivityService::new(ApiClient::new(server.uri()).unwrap());
    match service.statistics().await.unwrap_err() {
        ApiError::Rejected { message, .. } => {
            assert_eq!(message, "statistics temporarily unavailable");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn garbled_2xx_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forum/posts/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login page</html>"))
        .mount(&server)
        .await;

    let service = ForumService::new(ApiClient::new(server.uri()).unwrap());
    let err = service.detail(3).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn transport_failure_is_its_own_kind() {
    // Nothing is listening on this port.
    let service = ArticleService::new(ApiClient::new("http://127.0.0.1:9").unwrap());
    let err = service.statistics().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
