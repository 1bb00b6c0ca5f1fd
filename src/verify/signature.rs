//! Recoverable signature parsing
//!
//! A message signature is 65 bytes: one header byte followed by the compact
//! `r || s` pair. The header byte carries both the recovery id and the
//! address format the signer committed to, per the BIP-137 message-signing
//! convention.

use crate::error::{VerifyError, VerifyResult};

/// Address format implied by a signature header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// P2PKH Base58Check (or CashAddr on coins that define a prefix)
    Legacy,
    /// P2WPKH nested in P2SH
    SegwitP2sh,
    /// Native P2WPKH bech32
    SegwitNative,
}

/// Recovery parameters derived from the header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryInfo {
    /// ECDSA recovery id, 0..=3
    pub recovery_id: u8,
    pub format: AddressFormat,
    /// Whether the recovered key is serialized compressed for derivation
    pub compressed: bool,
}

/// A 65-byte recoverable message signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSignature {
    bytes: [u8; Self::LENGTH],
}

impl MessageSignature {
    pub const LENGTH: usize = 65;

    /// Parse from the wire encoding: 130 hex characters
    pub fn from_hex(signature_hex: &str) -> VerifyResult<Self> {
        let decoded = hex::decode(signature_hex)
            .map_err(|_| VerifyError::InvalidSignatureLength(signature_hex.len() / 2))?;
        Self::from_bytes(&decoded)
    }

    pub fn from_bytes(raw: &[u8]) -> VerifyResult<Self> {
        if raw.len() != Self::LENGTH {
            return Err(VerifyError::InvalidSignatureLength(raw.len()));
        }
        let mut bytes = [0u8; Self::LENGTH];
        bytes.copy_from_slice(raw);
        Ok(Self { bytes })
    }

    pub fn header(&self) -> u8 {
        self.bytes[0]
    }

    /// Compact `r || s` without the header byte
    pub fn compact(&self) -> &[u8] {
        &self.bytes[1..]
    }

    /// Decode the header byte into recovery parameters
    ///
    /// | header | format              | key serialization |
    /// |--------|---------------------|-------------------|
    /// | 27-30  | legacy              | uncompressed      |
    /// | 31-34  | legacy              | compressed        |
    /// | 35-38  | P2SH-wrapped segwit | compressed        |
    /// | 39-42  | native segwit       | compressed        |
    pub fn recovery_info(&self) -> VerifyResult<RecoveryInfo> {
        let header = self.header();
        let (base, format, compressed) = match header {
            27..=30 => (27, AddressFormat::Legacy, false),
            31..=34 => (31, AddressFormat::Legacy, true),
            35..=38 => (35, AddressFormat::SegwitP2sh, true),
            39..=42 => (39, AddressFormat::SegwitNative, true),
            _ => return Err(VerifyError::InvalidSignatureHeader(header)),
        };
        Ok(RecoveryInfo {
            recovery_id: header - base,
            format,
            compressed,
        })
    }
}
