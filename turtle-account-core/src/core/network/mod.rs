//! Address network resolution
//!
//! An address carries its network in the second decoded byte, so resolving
//! it is a table lookup with no I/O.

use std::sync::Arc;

use crate::domain::entities::{NetworkDescriptor, NetworkTable};
use crate::shared::types::AccountResult;
use crate::shared::utils::address_network_byte;

/// Maps addresses to the network they were issued for
#[derive(Debug, Clone)]
pub struct NetworkResolver {
    table: Arc<NetworkTable>,
}

impl NetworkResolver {
    pub fn new(table: NetworkTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &NetworkTable {
        &self.table
    }

    /// Raw network identifier byte of `address`
    pub fn network_byte(&self, address: &str) -> AccountResult<u8> {
        address_network_byte(address)
    }

    /// Resolve the network an address belongs to.
    ///
    /// Returns `Ok(None)` when the byte is not in the table; that is a normal
    /// outcome. Malformed addresses yield `AccountError::Decode`.
    pub fn resolve(&self, address: &str) -> AccountResult<Option<NetworkDescriptor>> {
        let byte = self.network_byte(address)?;
        let network = self.table.get(byte).cloned();
        if network.is_none() {
            log::debug!("No network registered for byte {} ({})", byte, address);
        }
        Ok(network)
    }

    /// True only when `route_address` resolves to a known network whose code
    /// differs from `active`. Unknown or malformed addresses are not a mismatch.
    pub fn is_network_mismatch(&self, route_address: &str, active: &NetworkDescriptor) -> bool {
        match self.resolve(route_address) {
            Ok(Some(network)) => network.code != active.code,
            Ok(None) => false,
            Err(e) => {
                log::debug!("Mismatch check skipped: {}", e);
                false
            }
        }
    }
}

impl Default for NetworkResolver {
    fn default() -> Self {
        Self::new(NetworkTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NetworkByte;
    use crate::shared::error::AccountError;
    use proptest::prelude::*;

    fn address_with_byte(byte: u8) -> String {
        let mut bytes = vec![1u8, byte];
        bytes.extend([7u8; 24]);
        bs58::encode(bytes).into_string()
    }

    #[test]
    fn test_resolve_mainnet_and_testnet() {
        let resolver = NetworkResolver::default();

        let mainnet = resolver.resolve(&address_with_byte(76)).expect("decodable");
        assert_eq!(mainnet.map(|n| n.code), Some("L".to_string()));

        let testnet = resolver.resolve(&address_with_byte(108)).expect("decodable");
        assert_eq!(testnet.map(|n| n.code), Some("l".to_string()));
    }

    #[test]
    fn test_unknown_byte_is_not_found() {
        let resolver = NetworkResolver::default();
        let result = resolver.resolve(&address_with_byte(b'S'));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_malformed_address_is_decode_error() {
        let resolver = NetworkResolver::default();
        assert!(matches!(resolver.resolve("not-base58!"), Err(AccountError::Decode(_))));
        assert!(matches!(resolver.resolve(""), Err(AccountError::Decode(_))));
    }

    #[test]
    fn test_injected_table() {
        let table = NetworkTable::empty()
            .with_entry(b'S', NetworkDescriptor::new("S", "https://stagenet.example"));
        let resolver = NetworkResolver::new(table);

        let stagenet = resolver.resolve(&address_with_byte(b'S')).expect("decodable");
        assert_eq!(stagenet.map(|n| n.server), Some("https://stagenet.example".to_string()));
        assert!(matches!(resolver.resolve(&address_with_byte(76)), Ok(None)));
    }

    #[test]
    fn test_network_mismatch() {
        let resolver = NetworkResolver::default();
        let mainnet = resolver
            .table()
            .network(NetworkByte::Mainnet)
            .cloned()
            .expect("mainnet entry");

        assert!(resolver.is_network_mismatch(&address_with_byte(108), &mainnet));
        assert!(!resolver.is_network_mismatch(&address_with_byte(76), &mainnet));
        assert!(!resolver.is_network_mismatch(&address_with_byte(1), &mainnet));
        assert!(!resolver.is_network_mismatch("0OIl", &mainnet));
    }

    proptest! {
        #[test]
        fn prop_resolution_follows_second_byte(
            first in any::<u8>(),
            byte in any::<u8>(),
            rest in proptest::collection::vec(any::<u8>(), 0..32),
        ) {
            let mut bytes = vec![first, byte];
            bytes.extend(rest);
            let address = bs58::encode(&bytes).into_string();

            let resolved = NetworkResolver::default().resolve(&address).expect("decodable");
            match byte {
                76 => {
                    prop_assert_eq!(resolved.map(|n| n.code), Some("L".to_string()));
                }
                108 => {
                    prop_assert_eq!(resolved.map(|n| n.code), Some("l".to_string()));
                }
                _ => {
                    prop_assert!(resolved.is_none());
                }
            }
        }

        #[test]
        fn prop_invalid_characters_never_resolve(address in "[1-9A-HJ-NP-Za-km-z]{0,20}[0OIl+/]") {
            let result = NetworkResolver::default().resolve(&address);
            prop_assert!(matches!(result, Err(AccountError::Decode(_))));
        }

        #[test]
        fn prop_single_byte_never_resolves(byte in any::<u8>()) {
            let address = bs58::encode([byte]).into_string();
            let result = NetworkResolver::default().resolve(&address);
            prop_assert!(matches!(result, Err(AccountError::Decode(_))));
        }
    }
}
