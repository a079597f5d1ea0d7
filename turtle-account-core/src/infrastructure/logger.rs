//! Logging setup and a log-backed notification sink

use std::sync::Once;

use crate::domain::repositories::NotificationSink;
use crate::shared::constants::LOG_LEVEL;
use crate::shared::types::Severity;

static INIT: Once = Once::new();

/// Initialise `env_logger` once. `RUST_LOG` overrides the build default.
pub fn init_logging() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(LOG_LEVEL);
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            eprintln!("Logger already initialised: {}", e);
        }
    });
}

/// Writes notifications to the log; used when no UI sink is wired in
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Success | Severity::Info => log::info!("{}", message),
        }
    }
}
