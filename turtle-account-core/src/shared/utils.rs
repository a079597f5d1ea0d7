//! Utility functions for the account core
//!
//! This module contains common utility functions used throughout the account core.

use crate::shared::constants::{
    ASSET_DETAILS_PATH, BALANCE_PATH, MIN_DECODED_ADDRESS_LENGTH, NETWORK_BYTE_INDEX, NFT_PATH,
    PUBLIC_KEY_HASH_END, PUBLIC_KEY_HASH_START,
};
use crate::shared::error::AccountError;

/// Make sure a server root ends with exactly one trailing slash
pub fn check_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// `{server}/assets/balance/{address}`
pub fn balance_url(server: &str, address: &str) -> String {
    format!("{}{}/{}", check_slash(server), BALANCE_PATH, address)
}

/// `{server}/assets/nft/{address}/limit/{limit}`
pub fn nft_url(server: &str, address: &str, limit: u32) -> String {
    format!("{}{}/{}/limit/{}", check_slash(server), NFT_PATH, address, limit)
}

/// `{server}/assets/details`
pub fn asset_details_url(server: &str) -> String {
    format!("{}{}", check_slash(server), ASSET_DETAILS_PATH)
}

/// Decode a base58 address into raw bytes.
///
/// Checksums are not verified; only the minimum length needed to read the
/// network byte is enforced.
pub fn decode_address(address: &str) -> Result<Vec<u8>, AccountError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| AccountError::decode(format!("Invalid base58 address '{}': {}", address, e)))?;

    if bytes.len() < MIN_DECODED_ADDRESS_LENGTH {
        return Err(AccountError::decode(format!(
            "Address '{}' decodes to {} byte(s), at least {} required",
            address,
            bytes.len(),
            MIN_DECODED_ADDRESS_LENGTH
        )));
    }

    Ok(bytes)
}

/// Read the network identifier byte embedded in an address
pub fn address_network_byte(address: &str) -> Result<u8, AccountError> {
    let bytes = decode_address(address)?;
    Ok(bytes[NETWORK_BYTE_INDEX])
}

/// Render a TN address in Ethereum form: `0x` followed by the public key hash
pub fn to_ethereum_address(address: &str) -> Result<String, AccountError> {
    let bytes = decode_address(address)?;
    if bytes.len() < PUBLIC_KEY_HASH_END {
        return Err(AccountError::decode(format!(
            "Address '{}' is too short to carry a public key hash",
            address
        )));
    }
    Ok(format!("0x{}", hex::encode(&bytes[PUBLIC_KEY_HASH_START..PUBLIC_KEY_HASH_END])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(bytes: &[u8]) -> String {
        bs58::encode(bytes).into_string()
    }

    #[test]
    fn test_check_slash() {
        assert_eq!(check_slash("https://node.example"), "https://node.example/");
        assert_eq!(check_slash("https://node.example/"), "https://node.example/");
    }

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            balance_url("https://node.example", "3Jabc"),
            "https://node.example/assets/balance/3Jabc"
        );
        assert_eq!(
            nft_url("https://node.example/", "3Jabc", 1000),
            "https://node.example/assets/nft/3Jabc/limit/1000"
        );
        assert_eq!(asset_details_url("https://node.example"), "https://node.example/assets/details");
    }

    #[test]
    fn test_decode_address_rejects_invalid_characters() {
        let result = decode_address("3J0OIl");
        assert!(matches!(result, Err(AccountError::Decode(_))));
    }

    #[test]
    fn test_decode_address_rejects_short_input() {
        assert!(matches!(decode_address(""), Err(AccountError::Decode(_))));
        assert!(matches!(decode_address(&encoded(&[1])), Err(AccountError::Decode(_))));
    }

    #[test]
    fn test_address_network_byte() {
        let address = encoded(&[1, 76, 9, 9, 9]);
        assert_eq!(address_network_byte(&address).expect("decodable"), 76);
    }

    #[test]
    fn test_to_ethereum_address() {
        let mut bytes = vec![1u8, 76];
        bytes.extend(0u8..20);
        bytes.extend([0xde, 0xad, 0xbe, 0xef]);
        let address = encoded(&bytes);

        let eth = to_ethereum_address(&address).expect("long enough");
        assert_eq!(eth, "0x000102030405060708090a0b0c0d0e0f10111213");
    }

    #[test]
    fn test_to_ethereum_address_too_short() {
        let address = encoded(&[1, 76, 1, 2, 3]);
        assert!(matches!(to_ethereum_address(&address), Err(AccountError::Decode(_))));
    }
}
