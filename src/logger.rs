use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();
static LEVEL: OnceLock<LogLevel> = OnceLock::new();

pub const LOG_ENV: &str = "CATALOG_SEED_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(value: &str) -> LogLevel {
        match value.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    fn from_env() -> LogLevel {
        LogLevel::parse(&std::env::var(LOG_ENV).unwrap_or_default())
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Start appending log lines to `log_path`. Until this succeeds every log
/// call is a no-op.
pub fn init(log_path: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let path = log_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = LOG_FILE.set(Mutex::new(file));
    let _ = LEVEL.set(LogLevel::from_env());
    info(&format!("logging initialized: {}", path.display()));
    Ok(path.to_path_buf())
}

fn now_ts() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn enabled(level: LogLevel) -> bool {
    level >= *LEVEL.get_or_init(LogLevel::from_env)
}

fn write_line(level: LogLevel, msg: &str) {
    if !enabled(level) {
        return;
    }
    if let Some(m) = LOG_FILE.get() {
        if let Ok(mut f) = m.lock() {
            let _ = writeln!(f, "{} [{}] {}", now_ts(), level.label(), msg);
            let _ = f.flush();
        }
    }
}

pub fn error(msg: &str) {
    write_line(LogLevel::Error, msg);
}
pub fn warn(msg: &str) {
    write_line(LogLevel::Warn, msg);
}
pub fn info(msg: &str) {
    write_line(LogLevel::Info, msg);
}
pub fn debug(msg: &str) {
    write_line(LogLevel::Debug, msg);
}
pub fn trace(msg: &str) {
    write_line(LogLevel::Trace, msg);
}
