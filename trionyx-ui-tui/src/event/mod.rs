//!
//! src/event/mod.rs
//! Event 层：把终端输入翻译成消息
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // poll_event() / handle_event()
//!         mod keymap;         // DefaultKeymap
//!
//!
//!     按键的分发优先级：
//!
//!         Ctrl+c                      始终退出
//!             ↓
//!         命令行已聚焦 → CommandLineMessage
//!             ↓
//!         对话框已挂载 → DialogMessage     （Esc 关闭、Enter 提交、Tab 切换字段）
//!             ↓
//!         全局快捷键                   （`:` 命令行、q 退出、Ctrl+p 切换焦点、Alt+r 重载面板）
//!             ↓
//!         焦点在面板   → PanelMessage      （↑↓ 选择、Enter 执行、x 关闭、Esc 返回页面）
//!
//!
//!     poll_event() 等待至多 timeout，
//!     超时返回 None，主循环借此驱动 Tick 与 Backend 事件处理。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
