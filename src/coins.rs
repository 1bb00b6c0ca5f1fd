//! Per-coin network parameters
//!
//! One immutable record per supported coin, looked up by case-sensitive
//! identifier. Adding a coin is a single table entry; no per-coin types or
//! dispatch exist anywhere else in the crate.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::{VerifyError, VerifyResult};

/// Static address and signing parameters for one coin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    pub name: &'static str,
    /// Magic string mixed into every signed-message digest
    pub message_magic: &'static str,
    /// Base58Check version byte for P2PKH addresses
    pub p2pkh_version: u8,
    /// Base58Check version byte for P2SH addresses
    pub p2sh_version: u8,
    /// Human-readable part for native segwit addresses, where defined
    pub bech32_hrp: Option<&'static str>,
    /// CashAddr prefix for coins that re-encode P2PKH addresses
    pub cashaddr_prefix: Option<&'static str>,
}

const COINS: &[NetworkParams] = &[
    NetworkParams {
        name: "Bitcoin",
        message_magic: "Bitcoin Signed Message:\n",
        p2pkh_version: 0x00,
        p2sh_version: 0x05,
        bech32_hrp: Some("bc"),
        cashaddr_prefix: None,
    },
    NetworkParams {
        name: "Testnet",
        message_magic: "Bitcoin Signed Message:\n",
        p2pkh_version: 0x6f,
        p2sh_version: 0xc4,
        bech32_hrp: Some("tb"),
        cashaddr_prefix: None,
    },
    // Bcash keeps Bitcoin's magic and version bytes; only the address
    // rendering differs (CashAddr instead of Base58Check).
    NetworkParams {
        name: "Bcash",
        message_magic: "Bitcoin Signed Message:\n",
        p2pkh_version: 0x00,
        p2sh_version: 0x05,
        bech32_hrp: None,
        cashaddr_prefix: Some("bitcoincash"),
    },
    NetworkParams {
        name: "Litecoin",
        message_magic: "Litecoin Signed Message:\n",
        p2pkh_version: 0x30,
        p2sh_version: 0x32,
        bech32_hrp: Some("ltc"),
        cashaddr_prefix: None,
    },
    NetworkParams {
        name: "Dogecoin",
        message_magic: "Dogecoin Signed Message:\n",
        p2pkh_version: 0x1e,
        p2sh_version: 0x16,
        bech32_hrp: None,
        cashaddr_prefix: None,
    },
    NetworkParams {
        name: "Dash",
        message_magic: "DarkCoin Signed Message:\n",
        p2pkh_version: 0x4c,
        p2sh_version: 0x10,
        bech32_hrp: None,
        cashaddr_prefix: None,
    },
];

lazy_static! {
    static ref COIN_TABLE: HashMap<&'static str, &'static NetworkParams> =
        COINS.iter().map(|params| (params.name, params)).collect();
}

/// Look up parameters for a coin by its case-sensitive identifier
pub fn network_params(coin: &str) -> VerifyResult<&'static NetworkParams> {
    COIN_TABLE
        .get(coin)
        .copied()
        .ok_or_else(|| VerifyError::UnknownCoin(coin.to_string()))
}

/// Names of all supported coins, for boundary reporting
pub fn supported_coins() -> Vec<&'static str> {
    COINS.iter().map(|params| params.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_coin_lookup() {
        let params = network_params("Bitcoin").unwrap();
        assert_eq!(params.p2pkh_version, 0x00);
        assert_eq!(params.bech32_hrp, Some("bc"));
        assert_eq!(params.message_magic, "Bitcoin Signed Message:\n");

        let params = network_params("Testnet").unwrap();
        assert_eq!(params.p2pkh_version, 0x6f);

        let params = network_params("Bcash").unwrap();
        assert_eq!(params.cashaddr_prefix, Some("bitcoincash"));
        assert_eq!(params.bech32_hrp, None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(network_params("bitcoin").is_err());
        assert!(network_params("BITCOIN").is_err());
        assert!(network_params("Bitcoin").is_ok());
    }

    #[test]
    fn test_unknown_coin() {
        let err = network_params("Namecoin").unwrap_err();
        assert_eq!(err, VerifyError::UnknownCoin("Namecoin".to_string()));
    }

    #[test]
    fn test_table_has_no_duplicate_names() {
        assert_eq!(COIN_TABLE.len(), COINS.len());
        assert_eq!(supported_coins().len(), COINS.len());
    }
}
