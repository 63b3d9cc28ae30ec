//! Logging setup for binaries embedding the SDK
//!
//! The SDK itself only emits `tracing` events; installing a subscriber is
//! left to the application.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::errors::SdkError;

#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Used when `RUST_LOG` is not set
    pub level: Level,

    pub json_format: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
        }
    }
}

/// Install a global stdout subscriber
pub fn init_logging(options: &LogOptions) -> Result<(), SdkError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(options.level).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if options.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| SdkError::Config(e.to_string()))
}
