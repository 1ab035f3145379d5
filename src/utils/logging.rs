//! Logging setup and configuration

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub struct LoggingGuard {
    pub _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Console logging on stderr, plus an hourly rolling file under `log_dir`
/// when one is given.
pub fn setup_logging(log_dir: Option<&str>) -> Result<LoggingGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::hourly(dir, "uniswap-v3-tags.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(false)
                .with_level(true)
                .with_ansi(false)
                .compact();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_level(true)
        )
        .with(file_layer)
        .with(log_filter(&std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default()))
        .init();

    Ok(LoggingGuard { _guard: guard })
}

/// Filter built from `RUST_LOG`-style directives, falling back to `info`
/// when none are given.
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}
