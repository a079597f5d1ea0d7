//! Error handling for the account core
//!
//! This module defines the error types used throughout the account core.

use thiserror::Error;

/// Account core error type
#[derive(Error, Debug, Clone)]
pub enum AccountError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Address decode error: {0}")]
    Decode(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Incomplete asset metadata: {0}")]
    PartialMetadata(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an address decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    /// Create a partial metadata error
    pub fn partial_metadata(message: impl Into<String>) -> Self {
        Self::PartialMetadata(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Refresh failures that leave the last published state authoritative.
    /// The caller may simply try again on the next trigger.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::PartialMetadata(_))
    }
}

// Transport and payload conversions
impl From<reqwest::Error> for AccountError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::fetch(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            Self::fetch(format!("Unparsable response: {}", err))
        } else {
            Self::fetch(format!("HTTP error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AccountError {
    fn from(err: serde_json::Error) -> Self {
        Self::fetch(format!("JSON error: {}", err))
    }
}

impl From<bs58::decode::Error> for AccountError {
    fn from(err: bs58::decode::Error) -> Self {
        Self::decode(format!("Base58 decoding error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AccountError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}
