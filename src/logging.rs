//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const LOG_FILE_PREFIX: &str = "themed-todo.log";

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `config.log_filter`. Keep the returned guard alive or buffered lines are lost.
pub fn init(config: &AppConfig) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, guard) = match &config.log_dir {
        Some(dir) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            LOG_FILE_PREFIX,
        )),
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.log_dir.is_none())
        .init();

    guard
}
