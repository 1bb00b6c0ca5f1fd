//! Signed-message verification
//!
//! Decides whether a recoverable signature over a message was produced by
//! the key controlling a given address. The pipeline is pure and stateless:
//!
//! 1. look up the coin's network parameters
//! 2. parse the 65-byte signature and decode its header byte
//! 3. digest the message under the coin's signing magic
//! 4. recover the public key from (digest, r, s, recovery id)
//! 5. derive the candidate address in the format the header committed to
//! 6. compare against the supplied address after normalization
//!
//! `try_verify_message` keeps each failure typed; `verify_message` is the
//! total boundary that collapses everything to `{success: bool}`.

pub mod address;
pub mod cashaddr;
pub mod hasher;
pub mod recover;
pub mod signature;


use crate::coins;
use crate::error::VerifyResult;
use crate::log_debug;
use crate::types::VerificationResult;

pub use signature::{AddressFormat, MessageSignature, RecoveryInfo};

/// Verify a signed message, surfacing typed failures
///
/// `Ok(false)` means the signature is well-formed but was not produced by
/// the key controlling `address`; `Err` means some stage could not run at
/// all. Callers that only need the external contract use `verify_message`.
pub fn try_verify_message(
    coin: &str,
    address: &str,
    signature_hex: &str,
    message: &[u8],
) -> VerifyResult<bool> {
    let params = coins::network_params(coin)?;

    let sig = MessageSignature::from_hex(signature_hex)?;
    let info = sig.recovery_info()?;

    let digest = hasher::message_digest(params.message_magic, message);
    let pubkey = recover::recover_public_key(&digest, sig.compact(), info.recovery_id, info.compressed)?;

    let derived = address::derive_address(&pubkey, info.format, params)?;
    let supplied = address::normalize_supplied(address, params)?;

    Ok(derived == supplied)
}

/// Verify a signed message against an address
///
/// Total for any well-typed input. Malformed signatures, unknown coins, and
/// failed recovery all report the same way a wrong signature does.
pub fn verify_message(
    coin: &str,
    address: &str,
    signature_hex: &str,
    message: &[u8],
) -> VerificationResult {
    match try_verify_message(coin, address, signature_hex, message) {
        Ok(success) => VerificationResult { success },
        Err(e) => {
            log_debug!("verify", "verification rejected", coin = coin, reason = e);
            VerificationResult::failed()
        }
    }
}
