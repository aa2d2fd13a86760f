//! Tracing setup
//!
//! Console output only, through a non-blocking writer. `RUST_LOG` overrides
//! the default `info` level; `log` records from the core and provider crates
//! are bridged in by `tracing-subscriber`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines on drop and must live as long as `main`.
pub fn init(format: LogFormat) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?,
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(writer).with_target(false))
            .try_init()?,
    }

    Ok(guard)
}
