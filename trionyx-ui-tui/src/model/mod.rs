//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │                          ┌──────────┐          ▼              │
//！│         │                          │  Model   │ ◀───────────           │
//！│         │                          │   层     │                         │
//！│         │                          └────┬─────┘                         │
//！│         │          ┌─────────┐          │                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/model/mod.rs
//! Model 层：应用的全部状态
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;        // App：顶层状态 + 待派发命令队列
//!         mod focus;      // FocusPanel：页面 / 面板
//!         mod page;       // PageState：当前路径与浏览历史
//!         mod dialog;     // DialogState：挂载中的对话框
//!         mod panel;      // PanelState：侧边面板与操作菜单
//!         mod command;    // CommandLineState 与 Command 解析
//!
//!
//!     App 在启动时为：
//!
//!         App {
//!             should_quit: false,
//!             focus: FocusPanel::Page,
//!             page: PageState { path: "", history: [] },
//!             dialog: DialogState { active: None },
//!             panel: PanelState { visible: false, content: None, selected: None },
//!             command_line: CommandLineState { active: false, input: "" },
//!             status_message: None,
//!             commands: [Navigate(start_path)],
//!         }
//!
//!     对话框与面板的状态只由 BackendEvent 修改：
//!     控制器才是“是否打开”的唯一来源，Model 只是它在终端里的投影。
//!

mod app;
mod command;
mod dialog;
mod focus;
mod page;
mod panel;

pub use app::{App, StatusMessage};
pub use command::{Command, CommandLineState};
pub use dialog::{DialogState, DialogView, SPINNER};
pub use focus::FocusPanel;
pub use page::PageState;
pub use panel::PanelState;
