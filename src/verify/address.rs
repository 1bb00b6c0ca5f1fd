//! Candidate address derivation
//!
//! Converts a recovered public key plus the address format committed to by
//! the signature header into the address string the signer must control.
//! Derivation and comparison are pure string-out functions; the orchestrator
//! owns the final equality check.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::coins::NetworkParams;
use crate::error::{VerifyError, VerifyResult};
use crate::verify::cashaddr;
use crate::verify::hasher::sha256d;
use crate::verify::signature::AddressFormat;

/// RIPEMD160(SHA256(data)), the standard key/script hash
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// Base58Check: version byte, 20-byte payload, 4-byte double-SHA256 checksum
fn base58check(version: u8, payload: &[u8; 20]) -> String {
    let mut data = Vec::with_capacity(25);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = sha256d(&data);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Bech32 encoding of a witness v0 keyhash program (BIP-173)
fn segwit_v0_address(hrp: &str, program: &[u8; 20]) -> VerifyResult<String> {
    use bech32::{ToBase32, Variant};

    let witness_version =
        bech32::u5::try_from_u8(0).map_err(|e| VerifyError::MalformedAddress(e.to_string()))?;
    let mut data = vec![witness_version];
    data.extend(program.to_base32());

    bech32::encode(hrp, data, Variant::Bech32)
        .map_err(|e| VerifyError::MalformedAddress(e.to_string()))
}

/// Derive the address a signer with `pubkey` controls, in the given format
pub fn derive_address(
    pubkey: &[u8],
    format: AddressFormat,
    params: &NetworkParams,
) -> VerifyResult<String> {
    let pubkey_hash = hash160(pubkey);

    match format {
        AddressFormat::Legacy => match params.cashaddr_prefix {
            Some(prefix) => Ok(cashaddr::encode_p2pkh(prefix, &pubkey_hash)),
            None => Ok(base58check(params.p2pkh_version, &pubkey_hash)),
        },
        AddressFormat::SegwitP2sh => {
            // Witness program: OP_0 PUSH20 <keyhash>, wrapped in P2SH
            let mut program = Vec::with_capacity(22);
            program.push(0x00);
            program.push(0x14);
            program.extend_from_slice(&pubkey_hash);
            Ok(base58check(params.p2sh_version, &hash160(&program)))
        }
        AddressFormat::SegwitNative => {
            let hrp = params.bech32_hrp.ok_or_else(|| {
                VerifyError::MalformedAddress(format!(
                    "{} defines no native segwit address format",
                    params.name
                ))
            })?;
            segwit_v0_address(hrp, &pubkey_hash)
        }
    }
}

/// Normalize a caller-supplied address for comparison against a derived one
///
/// CashAddr coins accept the payload with or without the coin prefix; a
/// mismatched explicit prefix is malformed. Every other format compares as a
/// literal case-sensitive string.
pub fn normalize_supplied(address: &str, params: &NetworkParams) -> VerifyResult<String> {
    let Some(prefix) = params.cashaddr_prefix else {
        return Ok(address.to_string());
    };

    match address.split_once(':') {
        None => Ok(format!("{}:{}", prefix, address)),
        Some((supplied, _)) if supplied == prefix => Ok(address.to_string()),
        Some((supplied, _)) => Err(VerifyError::MalformedAddress(format!(
            "address prefix {} does not match {}",
            supplied, prefix
        ))),
    }
}
