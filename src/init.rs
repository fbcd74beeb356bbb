use crate::config::ContextConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Error returned when a global subscriber is already installed.
#[derive(thiserror::Error, Debug)]
#[error("failed to install global tracing subscriber: {0}")]
pub struct InitError(#[from] tracing::subscriber::SetGlobalDefaultError);

/// Install a global `tracing` subscriber matching the context configuration.
///
/// **Parameters**
/// - `config`: when `json` is set, events (including the records emitted
///   by [`TracingSink`](crate::tracing_sink::TracingSink)) are written as
///   JSON lines; otherwise as human-readable text, with ANSI colors only if
///   [`ContextConfig::colorize`] allows it.
///
/// **Effects**
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init_tracing(config: &ContextConfig) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // The two formatters have different types, so the subscriber is built
    // in two variants.
    if config.json {
        let fmt_layer = tracing_subscriber::fmt::layer().json().with_ansi(false);
        let subscriber = Registry::default().with(filter).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_ansi(config.colorize());
        let subscriber = Registry::default().with(filter).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

/// Initialize tracing from `EXCHANGE_LOG_*` environment variables, falling
/// back to defaults if they are malformed.
pub fn init_tracing_from_env() -> Result<ContextConfig, InitError> {
    let config = ContextConfig::from_env().unwrap_or_else(|e| {
        eprintln!("{e}, using default exchange log configuration");
        ContextConfig::default()
    });
    init_tracing(&config)?;
    Ok(config)
}
