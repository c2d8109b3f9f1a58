//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│                    └─────────┘     └──────────┘     └────┬────┘         │
//！│                                          ▲               │              │
//！│                                   BackendEvent           ▼              │
//！│                                          │          ┌──────────┐        │
//！│                                    ┌─────┴────┐     │  Model   │        │
//！│                                    │ Backend  │ ◀── │  + 命令  │        │
//！│                                    └──────────┘     └──────────┘        │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/update/mod.rs
//! Update 层：根据消息修改 Model
//!
//! update() 是同步的纯状态变换：
//!     · 按键意图 → 修改本地状态（字段焦点、输入、操作菜单选中项）
//!     · 需要网络或控制器的操作 → app.push_command(BackendCommand::...)
//!     · BackendEvent → 落到对话框 / 面板 / 页面状态
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod dialog;     // DialogMessage
//!         mod panel;      // PanelMessage
//!         mod command;    // CommandLineMessage 与命令执行
//!         mod backend;    // BackendEvent
//!

mod backend;
mod command;
mod dialog;
mod panel;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 面板不可见或对话框打开时不切换焦点
            if app.panel.visible && !app.dialog.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Dialog(dialog_msg) => dialog::update(app, dialog_msg),

        AppMessage::Panel(panel_msg) => panel::update(app, panel_msg),

        AppMessage::CommandLine(command_msg) => command::update(app, command_msg),

        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::Tick => {
            app.tick = app.tick.wrapping_add(1);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
