//! Error types for the verification pipeline
//!
//! Every stage fails with a typed error so the recovery and derivation math
//! stays auditable in isolation. The orchestrator collapses all of them to
//! the boolean verification contract; only malformed request JSON ever
//! surfaces an error object at the FFI boundary.

use thiserror::Error;

/// Failure modes of the verification pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Signature did not hex-decode to exactly 65 bytes
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// Header byte outside every defined recovery range
    #[error("Invalid signature header byte: {0}")]
    InvalidSignatureHeader(u8),

    /// Public key recovery failed (r/s out of range or point off-curve)
    #[error("Public key recovery failed: {0}")]
    RecoveryFailure(String),

    /// Coin identifier not present in the network parameter table
    #[error("Unknown coin: {0}")]
    UnknownCoin(String),

    /// Supplied address cannot be normalized for comparison
    #[error("Malformed address: {0}")]
    MalformedAddress(String),
}

impl VerifyError {
    /// Stable snake_case code for the JSON boundary
    pub fn code(&self) -> &'static str {
        match self {
            VerifyError::InvalidSignatureLength(_) => "invalid_signature_length",
            VerifyError::InvalidSignatureHeader(_) => "invalid_signature_header",
            VerifyError::RecoveryFailure(_) => "recovery_failure",
            VerifyError::UnknownCoin(_) => "unknown_coin",
            VerifyError::MalformedAddress(_) => "malformed_address",
        }
    }
}

/// Result type alias for verification operations
pub type VerifyResult<T> = Result<T, VerifyError>;
