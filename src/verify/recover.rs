//! ECDSA public key recovery on secp256k1
//!
//! Reconstructs the signer's public key from the message digest, the compact
//! `r || s` pair, and the recovery id. The curve math lives in libsecp256k1,
//! which validates the r/s range and the implied curve point and runs with
//! constant structure regardless of input values.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1};

use crate::error::{VerifyError, VerifyResult};

/// Recover the signing public key, serialized per the `compressed` flag
///
/// Returns SEC1 bytes: 33 compressed or 65 uncompressed. Fails with
/// `RecoveryFailure` when r or s is zero or not below the curve order, or
/// when no valid curve point matches the digest and recovery id.
pub fn recover_public_key(
    digest: &[u8; 32],
    compact: &[u8],
    recovery_id: u8,
    compressed: bool,
) -> VerifyResult<Vec<u8>> {
    let secp = Secp256k1::new();

    let msg = Message::from_digest_slice(digest)
        .map_err(|e| VerifyError::RecoveryFailure(e.to_string()))?;

    let rec_id = RecoveryId::from_i32(recovery_id as i32)
        .map_err(|e| VerifyError::RecoveryFailure(e.to_string()))?;

    let signature = RecoverableSignature::from_compact(compact, rec_id)
        .map_err(|e| VerifyError::RecoveryFailure(e.to_string()))?;

    let public_key = secp
        .recover_ecdsa(&msg, &signature)
        .map_err(|e| VerifyError::RecoveryFailure(e.to_string()))?;

    Ok(if compressed {
        public_key.serialize().to_vec()
    } else {
        public_key.serialize_uncompressed().to_vec()
    })
}
