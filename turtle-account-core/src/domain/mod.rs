//! Domain layer - entities and repositories
//!
//! This module contains the domain model of the account view and the
//! traits through which it reaches the outside world.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
