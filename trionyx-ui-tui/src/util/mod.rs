//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                         Util 层在进程中的位置                            │
//！│                                                                         │
//！│   main.rs                                                               │
//！│     │                                                                   │
//！│     ├── init_logging() ──────▶ <data_dir>/trionyx-ui-tui/*.log          │
//！│     │                            ▲                                      │
//！│     │                            │ log / tracing 记录                   │
//！│     ├── init_terminal()          │                                      │
//！│     │      │              ┌──────┴──────┐      ┌──────────────┐         │
//！│     │      ▼              │  Backend    │ ───▶ │ html_to_text │         │
//！│     │   app::run() ─────▶ │  View       │      │ extract_form │         │
//！│     │                     └─────────────┘      └──────────────┘         │
//！│     └── restore_terminal()                                              │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：与业务无关的基础设施
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logging;        // 文件日志（tracing + tracing-appender）
//!         pub mod html;       // 服务端 HTML 片段 → 纯文本 / 表单控件
//!
//!
//!     终端：
//!         init_terminal()     启用原始模式，进入备用屏幕
//!         restore_terminal()  无论 app::run 成功与否，main 都会调用
//!
//!
//!     日志：
//!         备用屏幕下 stdout 不可用，日志写入文件；
//!         init_logging() 返回的 WorkerGuard 由 main 持有到退出。
//!
//!
//!     HTML：
//!         对话框和面板内容都是服务端渲染的 HTML 片段，
//!         html_to_text() 用于显示，extract_form_fields() 用于在对话框里编辑并提交表单。
//!

pub mod html;
mod logging;
mod terminal;

pub use logging::{default_log_path, init_logging};
pub use terminal::{init_terminal, restore_terminal, Term};
