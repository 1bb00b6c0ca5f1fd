//! Property tests for the verification pipeline

use proptest::prelude::*;
use secp256k1::{Message, Secp256k1, SecretKey};
use sigcheck::verify::signature::AddressFormat;
use sigcheck::verify::{address, hasher};
use sigcheck::{network_params, verify_message};

fn any_secret_key() -> impl Strategy<Value = SecretKey> {
    prop::array::uniform32(any::<u8>()).prop_filter_map("valid secp256k1 scalar", |bytes| {
        SecretKey::from_slice(&bytes).ok()
    })
}

fn sign(secret: &SecretKey, magic: &str, message: &[u8], header_base: u8) -> String {
    let secp = Secp256k1::new();
    let digest = hasher::message_digest(magic, message);
    let msg = Message::from_digest_slice(&digest).unwrap();
    let (recovery_id, compact) = secp
        .sign_ecdsa_recoverable(&msg, secret)
        .serialize_compact();

    let mut bytes = Vec::with_capacity(65);
    bytes.push(header_base + recovery_id.to_i32() as u8);
    bytes.extend_from_slice(&compact);
    hex::encode(bytes)
}

fn derive(secret: &SecretKey, coin: &str, format: AddressFormat, compressed: bool) -> String {
    let secp = Secp256k1::new();
    let public_key = secret.public_key(&secp);
    let serialized = if compressed {
        public_key.serialize().to_vec()
    } else {
        public_key.serialize_uncompressed().to_vec()
    };
    address::derive_address(&serialized, format, network_params(coin).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn own_signature_verifies(secret in any_secret_key(), message in prop::collection::vec(any::<u8>(), 0..512)) {
        let addr = derive(&secret, "Bitcoin", AddressFormat::Legacy, true);
        let sig = sign(&secret, "Bitcoin Signed Message:\n", &message, 31);
        prop_assert!(verify_message("Bitcoin", &addr, &sig, &message).success);
    }

    #[test]
    fn changed_message_fails(secret in any_secret_key(), message in prop::collection::vec(any::<u8>(), 1..256)) {
        let addr = derive(&secret, "Bitcoin", AddressFormat::Legacy, true);
        let sig = sign(&secret, "Bitcoin Signed Message:\n", &message, 31);

        let mut altered = message.clone();
        altered[0] = altered[0].wrapping_add(1);
        prop_assert!(!verify_message("Bitcoin", &addr, &sig, &altered).success);
    }

    #[test]
    fn other_keys_address_fails(a in any_secret_key(), b in any_secret_key(), message in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assume!(a != b);
        let addr = derive(&b, "Bitcoin", AddressFormat::Legacy, true);
        let sig = sign(&a, "Bitcoin Signed Message:\n", &message, 31);
        prop_assert!(!verify_message("Bitcoin", &addr, &sig, &message).success);
    }

    #[test]
    fn segwit_round_trip_holds(secret in any_secret_key(), message in prop::collection::vec(any::<u8>(), 0..128)) {
        let addr = derive(&secret, "Bitcoin", AddressFormat::SegwitNative, true);
        let sig = sign(&secret, "Bitcoin Signed Message:\n", &message, 39);
        prop_assert!(verify_message("Bitcoin", &addr, &sig, &message).success);
    }

    #[test]
    fn arbitrary_signature_bytes_never_panic(
        raw in prop::collection::vec(any::<u8>(), 0..80),
        message in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        // Totality: any byte blob collapses to a boolean, never a panic
        let sig_hex = hex::encode(&raw);
        let result = verify_message("Bitcoin", "1JwSSubhmg6iPtRjtyqhUYYH7bZg3Lfy1T", &sig_hex, &message);
        let _ = result.success;
    }
}
