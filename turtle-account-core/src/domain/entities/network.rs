//! Network entity for the account core

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::constants::{
    MAINNET_BYTE, MAINNET_CLIENT_ORIGIN, MAINNET_SERVER, TESTNET_BYTE, TESTNET_CLIENT_ORIGIN,
    TESTNET_SERVER,
};

/// Known network identifier bytes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NetworkByte {
    Mainnet = MAINNET_BYTE,
    Testnet = TESTNET_BYTE,
}

impl NetworkByte {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            MAINNET_BYTE => Some(NetworkByte::Mainnet),
            TESTNET_BYTE => Some(NetworkByte::Testnet),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn code(self) -> char {
        self.as_byte() as char
    }

    pub fn name(self) -> &'static str {
        match self {
            NetworkByte::Mainnet => "mainnet",
            NetworkByte::Testnet => "testnet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Some(NetworkByte::Mainnet),
            "testnet" => Some(NetworkByte::Testnet),
            _ => None,
        }
    }
}

/// Where a network's backend lives and how it is identified
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub code: String,
    pub server: String,
    pub client_origin: Option<String>,
    pub matcher: Option<String>,
}

impl NetworkDescriptor {
    pub fn new(code: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            server: server.into(),
            client_origin: None,
            matcher: None,
        }
    }

    pub fn with_client_origin(mut self, client_origin: impl Into<String>) -> Self {
        self.client_origin = Some(client_origin.into());
        self
    }

    pub fn with_matcher(mut self, matcher: impl Into<String>) -> Self {
        self.matcher = Some(matcher.into());
        self
    }
}

/// Immutable table of networks keyed by identifier byte.
///
/// Built once at startup and handed to whoever needs to resolve addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTable {
    entries: BTreeMap<u8, NetworkDescriptor>,
}

impl NetworkTable {
    /// An empty table; every lookup misses
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Mainnet and testnet with their public endpoints
    pub fn builtin() -> Self {
        Self::empty()
            .with_entry(
                MAINNET_BYTE,
                NetworkDescriptor::new(NetworkByte::Mainnet.code().to_string(), MAINNET_SERVER)
                    .with_client_origin(MAINNET_CLIENT_ORIGIN),
            )
            .with_entry(
                TESTNET_BYTE,
                NetworkDescriptor::new(NetworkByte::Testnet.code().to_string(), TESTNET_SERVER)
                    .with_client_origin(TESTNET_CLIENT_ORIGIN),
            )
    }

    pub fn with_entry(mut self, byte: u8, descriptor: NetworkDescriptor) -> Self {
        self.entries.insert(byte, descriptor);
        self
    }

    pub fn get(&self, byte: u8) -> Option<&NetworkDescriptor> {
        self.entries.get(&byte)
    }

    pub fn network(&self, network: NetworkByte) -> Option<&NetworkDescriptor> {
        self.get(network.as_byte())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &NetworkDescriptor)> {
        self.entries.iter().map(|(byte, descriptor)| (*byte, descriptor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NetworkTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_bytes() {
        assert_eq!(NetworkByte::Mainnet.as_byte(), 76);
        assert_eq!(NetworkByte::Testnet.as_byte(), 108);
        assert_eq!(NetworkByte::Mainnet.code(), 'L');
        assert_eq!(NetworkByte::Testnet.code(), 'l');
        assert_eq!(NetworkByte::from_byte(76), Some(NetworkByte::Mainnet));
        assert_eq!(NetworkByte::from_byte(83), None);
    }

    #[test]
    fn test_network_names() {
        assert_eq!(NetworkByte::from_name("Mainnet"), Some(NetworkByte::Mainnet));
        assert_eq!(NetworkByte::from_name(" testnet "), Some(NetworkByte::Testnet));
        assert_eq!(NetworkByte::from_name("stagenet"), None);
    }

    #[test]
    fn test_builtin_table() {
        let table = NetworkTable::builtin();
        assert_eq!(table.len(), 2);

        let mainnet = table.network(NetworkByte::Mainnet).expect("mainnet entry");
        assert_eq!(mainnet.code, "L");
        assert_eq!(mainnet.server, MAINNET_SERVER);
        assert_eq!(mainnet.client_origin.as_deref(), Some(MAINNET_CLIENT_ORIGIN));
        assert!(mainnet.matcher.is_none());

        let testnet = table.get(108).expect("testnet entry");
        assert_eq!(testnet.code, "l");
        assert_eq!(testnet.server, TESTNET_SERVER);
    }

    #[test]
    fn test_extra_entries() {
        let table = NetworkTable::builtin()
            .with_entry(b'S', NetworkDescriptor::new("S", "https://stagenet.example"));
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'S').map(|n| n.code.as_str()), Some("S"));
        assert!(NetworkTable::empty().get(MAINNET_BYTE).is_none());
    }
}
