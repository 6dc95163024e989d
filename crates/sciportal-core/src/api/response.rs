//! The `{success, message, data}` envelope every platform endpoint speaks.

use serde::{Deserialize, Serialize};

/// Parsed wire envelope. `message` and `data` are independent of `success`
/// on the wire, so both stay optional here.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Serializable envelope for callers that still speak the wire format.
/// Folds any tagged result back into `{success, message, data}`, where
/// every failure kind becomes `{success: false, message, data: null}`.
#[derive(Debug, Serialize)]
pub struct WireResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> WireResponse<T> {
    pub fn from_result(result: crate::api::ApiResult<T>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                message: "ok".to_string(),
                data: Some(data),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
                data: None,
            },
        }
    }
}
