//! User-facing notifications
//!
//! The account core does not render anything; it hands messages to a sink
//! supplied by the embedding application.

use crate::shared::types::Severity;

pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}
