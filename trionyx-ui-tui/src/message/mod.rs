//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐          ┌──────────────┐          ┌──────────┐              │
//！│   │  Event  │ ───────▶ │   Message    │ ───────▶ │  Update  │              │
//！│   │   层    │   翻译    │     层       │   消费    │    层    │              │
//！│   └─────────┘          │              │          └────┬─────┘              │
//！│                        │ AppMessage   │               │                    │
//！│   ┌─────────┐          │ DialogMsg    │               │ BackendCommand     │
//！│   │ Backend │ ───────▶ │ PanelMsg     │               ▼                    │
//！│   │   层    │  事件     │ CmdLineMsg   │          ┌──────────┐              │
//！│   └─────────┘          │ BackendEvent │          │ Backend  │              │
//！│                        └──────────────┘          └──────────┘              │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：Event 层与 Update 层之间的“语言”
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：顶层消息
//!         mod dialog;         // DialogMessage：对话框内的按键意图
//!         mod panel;          // PanelMessage：面板操作菜单
//!         mod command;        // CommandLineMessage：`:` 命令行
//!         mod backend;        // BackendEvent / BackendCommand：与 Backend 层往来
//!
//!
//!     消息来源有两个：
//!         · Event 层把按键翻译成 AppMessage
//!         · 主循环把 Backend 层经通道送来的 BackendEvent 包装成 AppMessage::Backend
//!
//!     Update 层不直接调用 Backend，而是把 BackendCommand 放进 App 的待发队列，
//!     由主循环统一派发。这样 update() 保持同步、可测试。
//!

mod app;
mod backend;
mod command;
mod dialog;
mod panel;

pub use app::AppMessage;
pub use backend::{BackendCommand, BackendEvent};
pub use command::CommandLineMessage;
pub use dialog::DialogMessage;
pub use panel::PanelMessage;
