//! Logging initialization: console layer plus an optional rolling JSON
//! file layer.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// level. The returned guard must be held for the lifetime of the process,
/// or buffered file output is lost on shutdown.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    if let Some(dir) = &config.dir {
        let appender = tracing_appender::rolling::daily(dir, "combined.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        registry
            .with(fmt::layer().json().with_writer(writer).with_ansi(false))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    }
}
