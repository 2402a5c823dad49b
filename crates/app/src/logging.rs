//! Logging subscriber initialisation.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, LoggingSettings};

/// Failures installing the logging subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    #[error(transparent)]
    Init(#[from] TryInitError),
}

/// Install the global subscriber per the logging settings.
///
/// # Errors
///
/// Returns an error when a global subscriber is already set.
pub fn init(settings: &LoggingSettings) -> Result<(), LoggingError> {
    match settings.log_format {
        LogFormat::Compact => init_with_layer(
            settings,
            tracing_subscriber::fmt::layer().compact().with_target(true),
        ),
        LogFormat::Json => init_with_layer(
            settings,
            tracing_subscriber::fmt::layer().json().with_target(true),
        ),
    }
}

fn build_env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},hyper=warn,reqwest=warn",
            settings.log_level
        ))
    })
}

fn init_with_layer<L>(settings: &LoggingSettings, fmt_layer: L) -> Result<(), LoggingError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(settings))
        .try_init()?;

    Ok(())
}
