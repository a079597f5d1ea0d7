//! Core account functionality
//!
//! This module contains network resolution, asset aggregation and the
//! account store that ties them together.

pub mod account;
pub mod assets;
pub mod network;

pub use account::{AccountChange, AccountStore};
pub use assets::AccountAssetAggregator;
pub use network::NetworkResolver;
