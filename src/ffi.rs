//! FFI layer
//!
//! All C-ABI exports are defined here. This is the ONLY file that should
//! contain `extern "C"` functions. Every function follows the same pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `sigcheck_free_string`)
//!
//! Responses always carry a `success` field. Verification outcomes are
//! `{"success": bool}` with nothing else; only request-level failures (null
//! pointer, bad UTF-8, bad JSON) add an `error` object.

use std::ffi::{CStr, CString};

use libc::c_char;

use crate::types::{ApiError, ApiResponse, VerifyMessageRequest};
use crate::verify;

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any sigcheck_* function
///
/// # Safety
/// The pointer must have been returned by a sigcheck_* function
#[unsafe(no_mangle)]
pub extern "C" fn sigcheck_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert C string to an owned Rust string, returning error JSON if invalid
fn parse_input(input: *const c_char) -> Result<String, *mut c_char> {
    if input.is_null() {
        return Err(request_error("invalid_input", "Null input pointer"));
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    match c_str.to_str() {
        Ok(s) => Ok(s.to_owned()),
        Err(_) => Err(request_error("invalid_input", "Input is not valid UTF-8")),
    }
}

/// Create a request-level error response JSON string
fn request_error(code: &str, message: &str) -> *mut c_char {
    let response = ApiResponse::request_error(ApiError::new(code, message));
    string_to_ptr(response.to_json())
}

/// Convert Rust string to C string pointer
fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            // Last resort: return a minimal error
            CString::new(r#"{"success":false,"error":{"code":"internal","message":"String conversion failed"}}"#)
                .unwrap()
                .into_raw()
        }
    }
}

// =============================================================================
// Verification
// =============================================================================

/// Verify a signed message against an address
///
/// # Input
/// ```json
/// {
///   "coin": "Bitcoin",
///   "address": "1JwSSubhmg6iPtRjtyqhUYYH7bZg3Lfy1T",
///   "signature": "<130 hex chars>",
///   "message": "This is an example of a signed message."
/// }
/// ```
///
/// # Output
/// ```json
/// { "success": true }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn sigcheck_verify_message(input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(input) {
        Ok(s) => s,
        Err(ptr) => return ptr,
    };

    let request: VerifyMessageRequest = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => return request_error("parse_error", &format!("Invalid JSON: {}", e)),
    };

    let result = verify::verify_message(
        &request.coin,
        &request.address,
        &request.signature,
        request.message.as_bytes(),
    );
    string_to_ptr(ApiResponse::from_result(result).to_json())
}
