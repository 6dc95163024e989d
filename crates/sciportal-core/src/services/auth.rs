//! Authentication flows against `/api/user/*` and `/api/admin/login`.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::api::{ApiClient, ApiResult};
use crate::auth::Session;
use crate::models::{Registration, UserProfile};

// Internal data payloads of the auth endpoints.

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
    // The user route has emitted both keys across backend versions.
    #[serde(alias = "user")]
    user_info: UserProfile,
}

#[derive(Debug, Deserialize)]
struct AdminLoginData {
    token: String,
    user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct RegisteredUser {
    user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct UpdateCount {
    #[serde(default)]
    updated_count: i64,
}

/// Login, registration and profile calls.
///
/// Mutates the passed session only after the server has answered
/// successfully; any failure leaves it untouched.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST /api/user/login`. On success both session fields are replaced
    /// and persisted.
    pub async fn login(
        &self,
        session: &mut Session,
        account: &str,
        password: &str,
    ) -> ApiResult<UserProfile> {
        let request = self
            .api
            .request(Method::POST, "/api/user/login")
            .json(&json!({ "account": account, "password": password }));
        let data: LoginData = self.api.execute(request).await?;
        debug!(account, "login succeeded");
        session.establish(data.token, data.user_info.clone());
        Ok(data.user_info)
    }

    /// `POST /api/admin/login`. Same contract as [`AuthService::login`],
    /// different endpoint and user shape.
    pub async fn admin_login(
        &self,
        session: &mut Session,
        account: &str,
        password: &str,
    ) -> ApiResult<UserProfile> {
        let request = self
            .api
            .request(Method::POST, "/api/admin/login")
            .json(&json!({ "account": account, "password": password }));
        let data: AdminLoginData = self.api.execute(request).await?;
        debug!(account, "admin login succeeded");
        session.establish(data.token, data.user.clone());
        Ok(data.user)
    }

    /// `POST /api/user/register`. Does not log the new user in.
    pub async fn register(&self, registration: &Registration) -> ApiResult<UserProfile> {
        let request = self
            .api
            .request(Method::POST, "/api/user/register")
            .json(registration);
        let data: RegisteredUser = self.api.execute(request).await?;
        Ok(data.user)
    }

    /// `GET /api/user/info`. On success only the user field is replaced;
    /// the token stays as it is.
    pub async fn fetch_user_info(&self, session: &mut Session) -> ApiResult<UserProfile> {
        let request = self.api.authed(Method::GET, "/api/user/info", session);
        let user: UserProfile = self.api.execute(request).await?;
        session.replace_user(user.clone());
        Ok(user)
    }

    /// `POST /api/user/update`. The backend reads the changed fields from
    /// a `kwargs` object; returns the number of updated records.
    pub async fn update_profile(
        &self,
        session: &Session,
        fields: serde_json::Value,
    ) -> ApiResult<i64> {
        let request = self
            .api
            .authed(Method::POST, "/api/user/update", session)
            .json(&json!({ "kwargs": fields }));
        let data: UpdateCount = self.api.execute(request).await?;
        Ok(data.updated_count)
    }

    /// Drop the session locally. No network call; cannot fail.
    pub fn logout(&self, session: &mut Session) {
        session.clear();
    }
}
