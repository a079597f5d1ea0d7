//! Domain repositories
//!
//! This module contains the traits the domain uses for data access
//! and for reporting back to the user.

pub mod asset_repository;
pub mod notification_sink;

// Re-export repositories
pub use asset_repository::*;
pub use notification_sink::*;
