//! Shared boundary types
//!
//! Data structures that cross the module and FFI boundaries are defined here
//! for consistent serialization.

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// Input record for a verification call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyMessageRequest {
    /// Case-sensitive coin identifier, e.g. "Bitcoin"
    pub coin: String,
    /// Address the signature is claimed to belong to
    pub address: String,
    /// Recoverable signature as 130 hex characters (65 bytes)
    pub signature: String,
    /// Signed message as a UTF-8 string
    pub message: String,
}

/// The only observable output of a verification call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub success: bool,
}

impl VerificationResult {
    pub fn passed() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}

/// Error body attached to malformed-request responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&VerifyError> for ApiError {
    fn from(e: &VerifyError) -> Self {
        Self::new(e.code(), e.to_string())
    }
}

/// JSON response wrapper for the FFI boundary
///
/// Verification outcomes serialize as `{"success": bool}`; only request-level
/// failures (bad JSON, bad UTF-8) carry an `error` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl ApiResponse {
    pub fn from_result(result: VerificationResult) -> Self {
        Self {
            success: result.success,
            error: None,
        }
    }

    pub fn request_error(error: ApiError) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed"}}"#
                .to_string()
        })
    }
}
