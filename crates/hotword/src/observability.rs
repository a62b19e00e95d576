//! Logging setup: human-readable logs on stderr, JSONL logs in a file.
//!
//! Log file location, first match wins:
//! 1. `HOTWORD_LOG_PATH` (exact file, never rotated)
//! 2. `HOTWORD_LOG_DIR` (daily rotation)
//! 3. `log_dir` from configuration (daily rotation)
//! 4. `<platform data dir>/hotword/logs` (daily rotation)

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "HOTWORD_LOG_PATH";
const LOG_DIR_ENV: &str = "HOTWORD_LOG_DIR";
const LOG_FILE_PREFIX: &str = "hotword.jsonl";

/// Where JSONL logs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file, appended to.
    File(PathBuf),
    /// A directory of daily-rotated files.
    Dir(PathBuf),
    /// No file logging.
    Disabled,
}

/// Resolved logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// JSONL destination.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, falling back to
    /// `config_dir` and then the platform data directory.
    pub fn from_env_with_overrides(config_dir: Option<PathBuf>) -> Self {
        let env_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let env_dir = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from);
        let default_dir = hotword_core::config::user_data_local_dir()
            .map(|dir| dir.join("logs").into_std_path_buf());
        Self {
            target: resolve_target(env_path, env_dir, config_dir, default_dir),
        }
    }
}

fn resolve_target(
    env_path: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    default_dir: Option<PathBuf>,
) -> LogTarget {
    if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        return LogTarget::File(path);
    }
    env_dir
        .filter(|d| !d.as_os_str().is_empty())
        .or(config_dir)
        .or(default_dir)
        .map_or(LogTarget::Disabled, LogTarget::Dir)
}

/// Build the filter: `RUST_LOG` if set, else quiet/verbose/default level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, default_level))
}

fn level_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Keeps the file writer flushing until dropped.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// A log directory that cannot be created disables file logging rather
/// than failing the command.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let (file_writer, unavailable) = match file_writer(&config.target) {
        Ok(writer) => (writer, None),
        Err(err) => (None, Some(err)),
    };
    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("global tracing subscriber already set")?;

    if let Some(err) = unavailable {
        tracing::warn!(error = %format!("{err:#}"), "file logging disabled");
    }
    Ok(ObservabilityGuard { _file: guard })
}

type FileWriter = (tracing_appender::non_blocking::NonBlocking, WorkerGuard);

fn file_writer(target: &LogTarget) -> anyhow::Result<Option<FileWriter>> {
    let appender = match target {
        LogTarget::Disabled => return Ok(None),
        LogTarget::Dir(dir) => {
            ensure_dir(dir)?;
            tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            ensure_dir(dir)?;
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            tracing_appender::rolling::never(dir, name)
        }
    };
    Ok(Some(tracing_appender::non_blocking(appender)))
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let target = resolve_target(
            Some(PathBuf::from("/tmp/a.jsonl")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
            None,
        );
        assert_eq!(target, LogTarget::File(PathBuf::from("/tmp/a.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let target = resolve_target(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
            Some(PathBuf::from("/tmp/default")),
        );
        assert_eq!(target, LogTarget::Dir(PathBuf::from("/tmp/env")));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let target = resolve_target(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/tmp/config")),
            None,
        );
        assert_eq!(target, LogTarget::Dir(PathBuf::from("/tmp/config")));
    }

    #[test]
    fn nothing_resolved_disables_file_logging() {
        assert_eq!(resolve_target(None, None, None, None), LogTarget::Disabled);
    }

    #[test]
    fn quiet_and_verbose_levels() {
        assert_eq!(level_directive(true, 2, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "info"), "debug");
        assert_eq!(level_directive(false, 3, "info"), "trace");
    }
}
