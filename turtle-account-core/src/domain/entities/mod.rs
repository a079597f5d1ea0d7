//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts of an account view.

pub mod asset;
pub mod network;

// Re-export entities
pub use asset::*;
pub use network::*;
