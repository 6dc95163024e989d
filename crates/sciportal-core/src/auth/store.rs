//! Durable session storage.
//!
//! Two entries under a per-app directory: the bearer token as a raw string
//! and the user profile as JSON. The store exists only to survive process
//! restarts; it is not a cache of server truth and the server never
//! invalidates it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::UserProfile;

/// File holding the raw bearer token.
const TOKEN_FILE: &str = "token";

/// File holding the JSON-serialized user profile.
const USER_FILE: &str = "user.json";

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(TOKEN_FILE), token).context("Failed to write token file")?;
        Ok(())
    }

    /// Read the stored token, if any. Read errors are logged, not surfaced.
    pub fn load_token(&self) -> Option<String> {
        let path = self.dir.join(TOKEN_FILE);
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(&path) {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "Failed to read token file");
                None
            }
        }
    }

    pub fn save_user(&self, user: &UserProfile) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string(user)?;
        std::fs::write(self.dir.join(USER_FILE), contents).context("Failed to write user file")?;
        Ok(())
    }

    /// Read the stored profile. `Ok(None)` when nothing is stored; an
    /// unreadable or unparseable entry is an error for the caller to log.
    pub fn load_user(&self) -> Result<Option<UserProfile>> {
        let path = self.dir.join(USER_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).context("Failed to read user file")?;
        let user =
            serde_json::from_str(&contents).context("Failed to parse stored user profile")?;
        Ok(Some(user))
    }

    /// Remove both entries. Missing files are fine.
    pub fn clear(&self) -> Result<()> {
        for name in [TOKEN_FILE, USER_FILE] {
            let path = self.dir.join(name);
            if path.exists() {
                std::fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
