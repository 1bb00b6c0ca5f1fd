//! CashAddr address encoding
//!
//! Re-encodes a P2PKH hash160 as `prefix:payload` using the CashAddr base32
//! alphabet and the 40-bit BCH polymod checksum.

const CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Encode a P2PKH hash160 as a CashAddr string with the given prefix
pub fn encode_p2pkh(prefix: &str, pubkey_hash: &[u8; 20]) -> String {
    // Version byte 0x00: type 0 (P2PKH), size 0 (160-bit hash)
    let mut payload = Vec::with_capacity(21);
    payload.push(0x00);
    payload.extend_from_slice(pubkey_hash);

    let mut data = to_five_bit_groups(&payload);
    let checksum = checksum(prefix, &data);
    data.extend_from_slice(&checksum);

    let body: String = data.iter().map(|&v| CHARSET[v as usize] as char).collect();
    format!("{}:{}", prefix, body)
}

/// Regroup 8-bit bytes into 5-bit values, zero-padding the tail
fn to_five_bit_groups(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            result.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        result.push(((acc << (5 - bits)) & 0x1f) as u8);
    }

    result
}

/// 40-bit checksum over `prefix || 0 || payload || 8 zero sentinels`
fn checksum(prefix: &str, payload: &[u8]) -> [u8; 8] {
    let mut values = Vec::with_capacity(prefix.len() + 1 + payload.len() + 8);
    for c in prefix.chars() {
        values.push((c as u8) & 0x1f);
    }
    values.push(0);
    values.extend_from_slice(payload);
    values.extend_from_slice(&[0u8; 8]);

    let polymod = polymod(&values) ^ 1;

    let mut checksum = [0u8; 8];
    for (i, slot) in checksum.iter_mut().enumerate() {
        *slot = ((polymod >> (5 * (7 - i))) & 0x1f) as u8;
    }
    checksum
}

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &v in values {
        let c0 = c >> 35;
        c = ((c & 0x07_ffff_ffff) << 5) ^ v as u64;
        for (i, &generator) in GENERATORS.iter().enumerate() {
            if (c0 >> i) & 1 != 0 {
                c ^= generator;
            }
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_vector() {
        // CashAddr spec test pair: hash160 of 1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu
        let hash: [u8; 20] = hex::decode("76a04053bda0a88bda5177b86a15c3b29f559873")
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(
            encode_p2pkh("bitcoincash", &hash),
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"
        );
    }

    #[test]
    fn test_payload_is_42_characters() {
        // 21 payload bytes -> 34 five-bit groups, plus 8 checksum groups
        let addr = encode_p2pkh("bitcoincash", &[0u8; 20]);
        let body = addr.strip_prefix("bitcoincash:").unwrap();
        assert_eq!(body.len(), 42);
        assert!(body.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn test_checksum_depends_on_prefix() {
        let hash = [0x5au8; 20];
        let mainnet = encode_p2pkh("bitcoincash", &hash);
        let testnet = encode_p2pkh("bchtest", &hash);
        assert_ne!(
            mainnet.split(':').nth(1).unwrap(),
            testnet.split(':').nth(1).unwrap(),
        );
    }

    #[test]
    fn test_five_bit_regrouping() {
        assert_eq!(to_five_bit_groups(&[0xff]), vec![0x1f, 0x1c]);
        assert_eq!(to_five_bit_groups(&[0x00]), vec![0x00, 0x00]);
        // 5 bytes regroup evenly into 8 values
        assert_eq!(to_five_bit_groups(&[0xff; 5]).len(), 8);
    }
}
