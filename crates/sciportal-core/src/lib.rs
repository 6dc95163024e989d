//! Client library for a community science-outreach platform.
//!
//! Wraps the platform's REST API: public reads for science articles,
//! activities and forum posts, token-authenticated user flows, and image
//! upload. Authentication state lives in an explicit [`auth::Session`]
//! backed by a small on-disk store, and every call returns a tagged result
//! that can be folded back into the platform's `{success, message, data}`
//! wire shape via [`api::WireResponse`].

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use api::{ApiClient, ApiError, ApiResult, WireResponse, DEFAULT_BASE_URL};
pub use auth::{Session, SessionStore};
pub use config::Config;
