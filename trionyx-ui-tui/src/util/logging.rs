//! 日志初始化
//!
//! 终端处于备用屏幕时不能往 stdout 写日志，
//! 所以日志一律写入文件（默认 `<data_dir>/trionyx-ui-tui/trionyx-tui.log`）。
//! 级别由 `RUST_LOG` 控制，未设置或无法解析时为 info。
//! 依赖库里的 `log` 宏经 tracing-subscriber 的 tracing-log 桥接一并输出。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "trionyx-tui.log";
const DEFAULT_LOG_LEVEL: &str = "info";

/// 默认日志文件路径
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("trionyx-ui-tui")
        .join(LOG_FILE_NAME)
}

/// 初始化日志，返回的 guard 必须存活到程序退出，否则尾部日志会丢失
pub fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| LOG_FILE_NAME.into(), ToOwned::to_owned);

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

/// `RUST_LOG` 的指令优先，缺省或无法解析时用 info
fn build_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
