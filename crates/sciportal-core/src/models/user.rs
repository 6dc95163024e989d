//! User profile and registration payloads.

use serde::{Deserialize, Serialize};

/// Profile record as the platform returns it.
///
/// The user and admin login routes emit slightly different shapes
/// (`username` vs `name`, `avatar` vs `avatar_url`), so every field is
/// optional and aliased where the routes disagree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default, alias = "name")]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "avatar_url")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub role_cn: Option<String>,
}

impl UserProfile {
    /// Best available display name: username, then account, then id.
    pub fn display_name(&self) -> String {
        if let Some(ref username) = self.username {
            return username.clone();
        }
        if let Some(ref account) = self.account {
            return account.clone();
        }
        self.id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Payload for `POST /api/user/register`.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub account: String,
    pub password: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}
