//! Signed-message digest construction
//!
//! Bitcoin-family message signing commits to
//! `compact_size(len(magic)) || magic || compact_size(len(message)) || message`
//! hashed with double SHA-256. The compact-size prefix matters for long
//! messages: anything over 252 bytes takes the multi-byte encoding.

use sha2::{Digest, Sha256};

/// Double SHA-256
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Append Bitcoin's compact-size encoding of `n` to `buf`
pub fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Digest a message under the coin's signing magic
///
/// Total function: any byte sequence is a valid message, including multi-byte
/// UTF-8 and multi-kilobyte inputs.
pub fn message_digest(magic: &str, message: &[u8]) -> [u8; 32] {
    let mut payload = Vec::with_capacity(9 + magic.len() + 9 + message.len());
    write_compact_size(&mut payload, magic.len() as u64);
    payload.extend_from_slice(magic.as_bytes());
    write_compact_size(&mut payload, message.len() as u64);
    payload.extend_from_slice(message);
    sha256d(&payload)
}
