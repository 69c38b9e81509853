//! Tracing subscriber installation.

use tracing_subscriber::{
    fmt,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, LoggingConfig};

/// Install a global subscriber writing to stderr, so log lines never mix
/// with the interactive output on stdout.
pub fn init(logging: &LoggingConfig) -> Result<(), TryInitError> {
    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(logging.env_filter())
        .with(fmt_layer)
        .try_init()
}
