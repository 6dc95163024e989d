//! Session lifecycle against a stubbed backend: login populates and
//! persists state, failures leave it alone, logout and restore behave
//! across process "restarts" (fresh sessions over the same store).

use sciportal_core::auth::{Session, SessionStore};
use sciportal_core::services::AuthService;
use sciportal_core::{ApiClient, ApiError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_in(dir: &tempfile::TempDir) -> Session {
    Session::new(SessionStore::new(dir.path().to_path_buf()))
}

fn auth_for(server: &MockServer) -> AuthService {
    AuthService::new(ApiClient::new(server.uri()).unwrap())
}

async fn stub_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .and(body_json(serde_json::json!({
            "account": "user123",
            "password": "password123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "login ok",
            "data": { "token": "T", "user_info": { "id": 1 } }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_sets_session_and_auth_headers() {
    let server = MockServer::start().await;
    stub_login_ok(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(&dir);

    let user = auth_for(&server)
        .login(&mut session, "user123", "password123")
        .await
        .unwrap();

    assert_eq!(user.id, Some(1));
    assert_eq!(session.token(), Some("T"));
    assert!(session.is_authenticated());
    assert_eq!(
        session.auth_headers().get("authorization").unwrap(),
        "Bearer T"
    );
}

#[tokio::test]
async fn failed_login_leaves_prior_state_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "message": "wrong password",
            "data": null
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(&dir);
    session.establish(
        "OLD".to_string(),
        sciportal_core::models::UserProfile {
            id: Some(42),
            ..Default::default()
        },
    );

    let err = auth_for(&server)
        .login(&mut session, "user123", "nope")
        .await
        .unwrap_err();

    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, Some(401));
            assert_eq!(message, "wrong password");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
    assert_eq!(session.token(), Some("OLD"));
    assert_eq!(session.user().and_then(|u| u.id), Some(42));

    // The durable entries still hold the old session too.
    let mut restored = session_in(&dir);
    restored.restore();
    assert_eq!(restored.token(), Some("OLD"));
}

#[tokio::test]
async fn restore_reconstructs_the_session_without_network() {
    let server = MockServer::start().await;
    stub_login_ok(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(&dir);
    auth_for(&server)
        .login(&mut session, "user123", "password123")
        .await
        .unwrap();
    let original_user = session.user().cloned();
    drop(session);
    drop(server);

    // No server anymore: restore works purely from the store.
    let mut restored = session_in(&dir);
    assert!(restored.is_authenticated());
    restored.restore();
    assert_eq!(restored.token(), Some("T"));
    assert_eq!(restored.user().cloned(), original_user);
}

#[tokio::test]
async fn logout_clears_everything_regardless_of_prior_state() {
    let server = MockServer::start().await;
    stub_login_ok(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(&dir);
    let auth = auth_for(&server);
    auth.login(&mut session, "user123", "password123")
        .await
        .unwrap();
    assert!(session.is_authenticated());

    auth.logout(&mut session);
    assert!(!session.is_authenticated());
    assert!(session.auth_headers().is_empty());

    let mut restored = session_in(&dir);
    restored.restore();
    assert!(!restored.is_authenticated());
    assert!(restored.user().is_none());

    // Logging out twice is harmless.
    auth.logout(&mut session);
}

#[tokio::test]
async fn fetch_user_info_replaces_only_the_user_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/info"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "ok",
            "data": { "id": 1, "account": "user123", "username": "renamed" }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(&dir);
    session.establish(
        "T".to_string(),
        sciportal_core::models::UserProfile {
            id: Some(1),
            username: Some("old-name".to_string()),
            ..Default::default()
        },
    );

    let user = auth_for(&server)
        .fetch_user_info(&mut session)
        .await
        .unwrap();

    assert_eq!(user.username.as_deref(), Some("renamed"));
    assert_eq!(session.token(), Some("T"));
    assert_eq!(
        session.user().and_then(|u| u.username.as_deref()),
        Some("renamed")
    );
}

#[tokio::test]
async fn admin_login_reads_the_user_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "ok",
            "data": {
                "token": "ADMIN-T",
                "user": { "id": 1, "account": "admin", "name": "Administrator", "role": "ADMIN" }
            }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(&dir);
    let user = auth_for(&server)
        .admin_login(&mut session, "admin", "secret")
        .await
        .unwrap();

    assert_eq!(user.username.as_deref(), Some("Administrator"));
    assert_eq!(session.token(), Some("ADMIN-T"));
}
