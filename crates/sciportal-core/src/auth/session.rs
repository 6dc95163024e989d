//! Client-side session state.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::warn;

use crate::auth::SessionStore;
use crate::models::UserProfile;

/// In-memory record of "am I authenticated, and as whom", mirrored into a
/// [`SessionStore`] on every mutation.
///
/// The token and user fields are deliberately independent: a restore can
/// yield a token without a parseable profile, and neither field is ever
/// validated against the server.
pub struct Session {
    store: SessionStore,
    token: Option<String>,
    user: Option<UserProfile>,
}

impl Session {
    /// An empty session over the given store. Call [`Session::restore`]
    /// once at startup to pick up state from a previous run.
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            token: None,
            user: None,
        }
    }

    /// Read the durable store into memory. A stored profile that fails to
    /// parse is skipped with a warning, never surfaced.
    pub fn restore(&mut self) {
        if let Some(token) = self.store.load_token() {
            self.token = Some(token);
        }
        match self.store.load_user() {
            Ok(Some(user)) => self.user = Some(user),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Ignoring stored user profile"),
        }
    }

    /// Install a fresh login: overwrite both fields and persist both.
    /// Store failures keep the in-memory session and log a warning.
    pub fn establish(&mut self, token: String, user: UserProfile) {
        if let Err(e) = self.store.save_token(&token) {
            warn!(error = %e, "Failed to persist token");
        }
        if let Err(e) = self.store.save_user(&user) {
            warn!(error = %e, "Failed to persist user profile");
        }
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Replace only the user profile, leaving the token untouched.
    pub fn replace_user(&mut self, user: UserProfile) {
        if let Err(e) = self.store.save_user(&user) {
            warn!(error = %e, "Failed to persist user profile");
        }
        self.user = Some(user);
    }

    /// Drop the session: clear both fields and both store entries.
    /// Never fails; a store that cannot be cleared is logged.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session store");
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// True when a token exists in memory or in the durable store.
    /// Says nothing about whether the server still accepts it.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() || self.store.load_token().is_some()
    }

    /// `Authorization: Bearer <token>` when a token is available (memory
    /// first, then the store), otherwise an empty map.
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let token = match &self.token {
            Some(token) => Some(token.clone()),
            None => self.store.load_token(),
        };
        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!(error = %e, "Token is not a valid header value"),
            }
        }
        headers
    }
}
