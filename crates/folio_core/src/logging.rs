//! Diagnostic log bootstrap for hosts embedding the controller.
//!
//! # Responsibility
//! - Start one size-rotated file logger per process.
//! - Record panics as single sanitized log lines.
//!
//! # Invariants
//! - Repeating init with an equal [`LogConfig`] is a no-op.
//! - Init with a different config is rejected, never applied.
//! - Init never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "folio";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;
const PANIC_PAYLOAD_MAX_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Validated logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Never `LevelFilter::Off`; hosts disable logging by not initializing it.
    pub level: LevelFilter,
    /// Absolute directory holding the rotated log files.
    pub dir: PathBuf,
}

impl LogConfig {
    /// Validates a level name and target directory.
    ///
    /// Accepts `trace|debug|info|warn|error` in any case, plus `warning`.
    pub fn parse(level: &str, dir: impl AsRef<Path>) -> Result<Self, String> {
        let level = match level.trim().to_ascii_lowercase().as_str() {
            "warning" => LevelFilter::Warn,
            "off" => return Err("log level `off` is not allowed; skip init instead".to_string()),
            other => other.parse::<LevelFilter>().map_err(|_| {
                format!("unsupported log level `{other}`; expected trace|debug|info|warn|error")
            })?,
        };

        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err("log directory cannot be empty".to_string());
        }
        if !dir.is_absolute() {
            return Err(format!(
                "log directory must be an absolute path, got `{}`",
                dir.display()
            ));
        }

        Ok(Self {
            level,
            dir: dir.to_path_buf(),
        })
    }
}

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - The level or directory fails [`LogConfig::parse`].
/// - The directory cannot be created or the backend fails to start.
/// - Logging is already active with a different config.
pub fn init_logging(level: &str, log_dir: impl AsRef<Path>) -> Result<(), String> {
    let requested = LogConfig::parse(level, log_dir)?;
    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(&requested))?;

    if active.config == requested {
        return Ok(());
    }
    Err(format!(
        "logging already active at level `{}` in `{}`; refusing to switch to level `{}` in `{}`",
        active.config.level,
        active.config.dir.display(),
        requested.level,
        requested.dir.display()
    ))
}

/// Active logger settings, or `None` before [`init_logging`] succeeds.
pub fn logging_status() -> Option<LogConfig> {
    ACTIVE_LOGGER.get().map(|active| active.config.clone())
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &LogConfig) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&config.dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            config.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(config.level.to_string())
        .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?
        .log_to_file(
            FileSpec::default()
                .directory(config.dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        config.level,
        config.dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        config: config.clone(),
        _handle: handle,
    })
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let message = match (payload.downcast_ref::<&str>(), payload.downcast_ref::<String>()) {
            (Some(text), _) => text,
            (None, Some(text)) => text.as_str(),
            (None, None) => "non-string panic payload",
        };
        let location = info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        error!(
            "event=panic module=logging status=error location={} payload={}",
            location,
            one_line(message, PANIC_PAYLOAD_MAX_CHARS)
        );
        previous(info);
    }));
}

/// Folds line breaks into spaces and caps the result at `max_chars`,
/// marking truncation with `...`.
fn one_line(value: &str, max_chars: usize) -> String {
    let mut folded: String = value
        .chars()
        .map(|c| if matches!(c, '\n' | '\r') { ' ' } else { c })
        .take(max_chars)
        .collect();
    if value.chars().nth(max_chars).is_some() {
        folded.push_str("...");
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, one_line, LogConfig};
    use log::LevelFilter;

    #[test]
    fn parse_accepts_any_case_and_warning_alias() {
        let config = LogConfig::parse(" DEBUG ", "/var/log/folio").expect("DEBUG is a level");
        assert_eq!(config.level, LevelFilter::Debug);
        let config = LogConfig::parse("warning", "/var/log/folio").expect("warning is an alias");
        assert_eq!(config.level, LevelFilter::Warn);
    }

    #[test]
    fn parse_rejects_unknown_and_off_levels() {
        let err = LogConfig::parse("verbose", "/var/log/folio").expect_err("not a level");
        assert!(err.contains("unsupported"));
        let err = LogConfig::parse("off", "/var/log/folio").expect_err("off is refused");
        assert!(err.contains("off"));
    }

    #[test]
    fn parse_rejects_relative_and_empty_dirs() {
        let err = LogConfig::parse("info", "logs").expect_err("relative dirs are refused");
        assert!(err.contains("absolute"));
        let err = LogConfig::parse("info", "").expect_err("empty dir is refused");
        assert!(err.contains("empty"));
    }

    #[test]
    fn one_line_folds_breaks_and_caps() {
        assert_eq!(one_line("a\nb\rc-long-tail", 5), "a b c...");
        assert_eq!(one_line("short", 5), "short");
    }

    #[test]
    fn init_is_idempotent_and_rejects_reconfiguration() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let other = tempfile::tempdir().expect("temp dir should be creatable");

        init_logging("info", dir.path()).expect("first init should succeed");
        init_logging("INFO", dir.path()).expect("same config should be idempotent");

        let level_err = init_logging("debug", dir.path()).expect_err("level switch must fail");
        assert!(level_err.contains("refusing to switch"));
        let dir_err = init_logging("info", other.path()).expect_err("dir switch must fail");
        assert!(dir_err.contains("refusing to switch"));

        let active = logging_status().expect("logging should be active");
        assert_eq!(active.level, LevelFilter::Info);
        assert_eq!(active.dir, dir.path());
    }
}
