//! Logging initialization.

use crate::settings::LoggingConfig;
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Initialize the global tracing subscriber. `--debug` lowers the default
/// filter to `debug`; `RUST_LOG` overrides both.
pub fn init(logging: &LoggingConfig, debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    if logging.format == "json" {
        let subscriber = Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(false));
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false));
        tracing::subscriber::set_global_default(subscriber)?;
    }

    tracing::info!("Console logging initialized");
    Ok(())
}
