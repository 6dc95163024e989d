//! REST API plumbing: client, envelope handling, errors, query building.
//!
//! The platform collapses every outcome into a `{success, message, data}`
//! envelope on the wire. This module parses that into a tagged result so
//! callers can tell a local validation failure from a transport failure
//! from a server rejection without matching on message strings.

pub mod client;
pub mod error;
pub mod query;
pub mod response;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use query::QueryPairs;
pub use response::{Envelope, WireResponse};
