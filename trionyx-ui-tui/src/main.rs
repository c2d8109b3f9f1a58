//! Trionyx TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 控制器与平台实现 (`backend/`)
//!
//!
//! main.rs
//! Trionyx TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 命令行参数
//!     load config             // 配置文件 + 命令行覆盖
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     tokio runtime           // 控制器的异步请求在此执行
//!     UiService::new()        // HTTP 传输 + 对话框/面板控制器
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;

use backend::{ConfigService, TomlConfigService, UiService};
use cli::Cli;
use util::{default_log_path, init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 解析命令行，加载配置
    let cli = Cli::parse();
    let config_service = cli
        .config
        .clone()
        .map_or_else(TomlConfigService::default, TomlConfigService::new);
    let mut config = config_service.load()?;
    if !config_service.path().exists() {
        // 首次运行写出默认配置，失败不影响启动
        if let Err(e) = config_service.save(&config) {
            eprintln!("Could not write {}: {e:#}", config_service.path().display());
        }
    }
    cli.apply(&mut config);

    // 2. 初始化日志（guard 需存活到退出）
    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let _log_guard = init_logging(&log_path)?;
    tracing::info!(base_url = %config.base_url, path = %config.start_path, "starting trionyx-tui");

    view::theme::set_theme_index(config.theme.index());

    // 3. 异步运行时与核心服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let service = UiService::new(&config, events_tx, runtime.handle().clone())?;

    // 4. 创建应用实例
    let mut app = model::App::new(&config.base_url, &config.start_path);

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &service, &mut events_rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("trionyx-tui exited");

    // 7. 返回结果
    result
}
