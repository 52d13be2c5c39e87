use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Installs a file logger when `log_file` is configured.
///
/// The terminal belongs to the UI, so nothing is logged to stdout. Keep the
/// returned guard alive until exit or buffered lines are lost.
pub fn init(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let Some(log_file) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let path = Path::new(log_file);
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Logging(format!("not a file path: {log_file}")))?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "nbbang={level},engine={level}",
            level = config.log_level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing::info!(path = log_file, "logging initialized");
    Ok(Some(guard))
}
