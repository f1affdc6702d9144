//! 日志初始化
//!
//! 日志按天滚动写入 `<data dir>/scratch/logs/scratch.log`，
//! 过滤规则取自 `RUST_LOG`，缺省为 `scratch=info`。

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::kernel::services::adapters::ensure_log_dir;

const LOG_FILE: &str = "scratch.log";
const DEFAULT_FILTER: &str = "scratch=info";

/// 持有后台写线程；丢弃时刷出剩余日志。
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn file_writer(log_dir: &Path) -> (NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    tracing_appender::non_blocking(file_appender)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Returns `None` if one is already set.
pub fn init(log_dir: &Path) -> Option<LoggingGuard> {
    let (writer, guard) = file_writer(log_dir);

    let subscriber = tracing_subscriber::registry().with(env_filter()).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir: log_dir.to_path_buf(),
    })
}

/// 使用平台日志目录，取不到时退回到临时目录。
pub fn init_default() -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("scratch").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    init(&log_dir)
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
