//! Sigcheck
//!
//! Message-signature verification engine for Bitcoin-family coins: given a
//! coin identifier, an address, a 65-byte recoverable signature, and an
//! arbitrary message, decide whether the signature was produced by the key
//! controlling that address.
//!
//! # Architecture
//!
//! - **coins**: immutable per-coin network parameter table
//! - **verify**: message hashing, signature decoding, public key recovery,
//!   address derivation, and the orchestrating pipeline
//! - **ffi**: C-ABI exports (JSON string in, JSON string out)
//!
//! The engine is a pure function of its inputs with no I/O and no shared
//! mutable state; it is safe to call concurrently without synchronization.
//!
//! # Example
//!
//! ```rust
//! use sigcheck::verify_message;
//!
//! let result = verify_message(
//!     "Bitcoin",
//!     "1JwSSubhmg6iPtRjtyqhUYYH7bZg3Lfy1T",
//!     "1ba77e01a9e17ba158b962cfef5f13dfed676ffc2b4bada24e58f784458b52b9\
//!      7421470d001d53d5880cf5e10e76f02be3e80bf21e18398cbd41e8c3b4af74c8c2",
//!     b"This is an example of a signed message.",
//! );
//! assert!(result.success);
//! ```

pub mod coins;
pub mod error;
pub mod ffi;
pub mod types;
pub mod utils;
pub mod verify;

// Re-export the engine surface for embedding callers
pub use coins::{network_params, supported_coins, NetworkParams};
pub use error::{VerifyError, VerifyResult};
pub use types::{VerificationResult, VerifyMessageRequest};
pub use verify::{try_verify_message, verify_message, AddressFormat, MessageSignature, RecoveryInfo};
