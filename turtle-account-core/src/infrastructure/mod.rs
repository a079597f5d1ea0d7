//! Infrastructure layer
//!
//! This module contains the concrete adapters behind the domain traits:
//! the node HTTP client, configuration loading and logging.

pub mod config;
pub mod http;
pub mod logger;

pub use config::AccountConfig;
pub use http::HttpAssetBackend;
pub use logger::{init_logging, LogNotificationSink};
