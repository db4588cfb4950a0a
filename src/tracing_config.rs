use std::{env, error::Error, io, path::Path};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder as RollingBuilder, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{GeneralConfig, LogLevel};

/// Selects the console format: `pretty`, `json` or `compact` (the default).
pub const LOG_FORMAT_ENV: &str = "WPA_LOG_FORMAT";

const DAYS_TO_KEEP: usize = 7;

/// Initialize tracing for the application
///
/// `RUST_LOG` wins when set. Otherwise the filter comes from
/// `general.log_level`, raised to `debug` when `debug` is true. Console
/// output goes to stderr so command output on stdout stays parseable. When
/// `general.log_dir` is set, a daily rolling file receives the same events.
///
/// The returned guard flushes the file writer and must be kept alive for
/// the lifetime of the program.
///
/// # Errors
/// Returns error if the log directory cannot be prepared or a subscriber is
/// already installed
pub fn init(general: &GeneralConfig, debug: bool) -> Result<Option<WorkerGuard>, Box<dyn Error>> {
    let level = if debug {
        LogLevel::Debug
    } else {
        general.log_level
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let (file_writer, guard) = match &general.log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_level(true)
            .with_writer(writer)
            .with_ansi(false)
    });

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        "pretty" => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_thread_ids(true)
                        .with_thread_names(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(guard)
}

fn file_writer(
    dir: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), Box<dyn Error>> {
    std::fs::create_dir_all(dir)?;

    let file_appender = RollingBuilder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("wpa")
        .filename_suffix("log")
        .build(dir)?;

    Ok(tracing_appender::non_blocking(file_appender))
}
