//! Wire helpers for the `getUpdates` call.
//!
//! The HTTP client is yours; these types cover the request body built from a
//! [`FetchRequest`] and the response envelope every API method replies with.

use crate::types::Update;
use courier_core::{CodecError, FetchRequest};
use courier_std::codec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Method name of the long-polling call.
pub const GET_UPDATES: &str = "getUpdates";

/// Body of a `getUpdates` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUpdatesParams {
    /// Identifier of the first update to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Maximum number of updates, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Long-polling timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// Update kinds to receive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl From<&FetchRequest> for GetUpdatesParams {
    fn from(request: &FetchRequest) -> Self {
        Self {
            offset: Some(request.offset),
            limit: Some(request.limit),
            timeout: Some(request.timeout.as_secs()),
            // An empty list would reset the server-side filter.
            allowed_updates: (!request.allowed_updates.is_empty())
                .then(|| request.allowed_updates.to_vec()),
        }
    }
}

/// Extra information about a failed call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating a flood-limited request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

/// The envelope around every API reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded.
    pub ok: bool,
    /// The result, when `ok` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Human-readable description of the outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Error code, when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    /// Extra error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl<T> ApiResponse<T> {
    /// Split the reply into its result or an [`ApiError`].
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.ok {
            return Err(ApiError::Api {
                code: self.error_code.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                retry_after: self.parameters.and_then(|p| p.retry_after),
            });
        }
        self.result.ok_or(ApiError::MissingResult)
    }
}

/// Errors turning a raw reply into a result.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server rejected the call.
    #[error("api error {code}: {description}")]
    Api {
        /// Error code.
        code: i32,
        /// Description from the server.
        description: String,
        /// Seconds to wait before retrying, for flood limits.
        retry_after: Option<u64>,
    },

    /// The body could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// `ok` was true but no result was sent.
    #[error("response is ok but carries no result")]
    MissingResult,
}

impl ApiError {
    /// Seconds the server asked to wait before retrying, if any.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            ApiError::Api { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Decode a raw `getUpdates` reply.
///
/// A nested envelope failure in any update fails the whole batch with that
/// envelope's [`CodecError`].
pub fn decode_updates(body: &[u8]) -> Result<Vec<Update>, ApiError> {
    let response: ApiResponse<Vec<Update>> = codec::from_slice(body)?;
    let updates = response.into_result()?;
    debug!(count = updates.len(), "decoded updates");
    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn params_from_request() {
        let request = FetchRequest {
            offset: 12,
            limit: 100,
            timeout: Duration::from_secs(30),
            allowed_updates: Arc::from([]),
        };
        let params = GetUpdatesParams::from(&request);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"offset": 12, "limit": 100, "timeout": 30})
        );
    }

    #[test]
    fn params_keep_allow_list() {
        let request = FetchRequest {
            offset: 0,
            limit: 5,
            timeout: Duration::ZERO,
            allowed_updates: Arc::from(["message".to_owned()]),
        };
        let params = GetUpdatesParams::from(&request);
        assert_eq!(params.allowed_updates, Some(vec!["message".to_owned()]));
    }

    #[test]
    fn error_reply_becomes_api_error() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":7}}"#;
        let err = decode_updates(body).unwrap_err();
        assert!(matches!(err, ApiError::Api { code: 429, .. }));
        assert_eq!(err.retry_after(), Some(7));
    }

    #[test]
    fn ok_without_result() {
        let err = decode_updates(br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingResult));
    }

    #[test]
    fn empty_batch() {
        assert!(decode_updates(br#"{"ok":true,"result":[]}"#).unwrap().is_empty());
    }
}
