//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Page,                        // 焦点在页面区
//!     page: PageState { path: start_path },           // 当前页面
//!     dialog: DialogState { active: None },           // 尚无对话框
//!     panel: PanelState { visible: false },           // 面板由 RestorePanel 决定是否出现
//!     commands: [Navigate(start_path)],               // 首个后端命令
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Ok(ev) = events.try_recv() {          // 先收取后端事件（控制器写入表面的结果）
//!         update::update(&mut app, Backend(ev))
//!     }
//!     for cmd in app.take_commands() {                // 再派发 update 产生的后端命令
//!         service.dispatch(cmd)                           // 异步操作在 tokio runtime 上执行
//!     }
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     match poll_event() {                            // 轮询获取输入，在此等待 100ms
//!         Some(event) => update(handle_event(event)),     // 按键 → 消息 → 更新
//!         None => update(Tick),                           // 超时 → 推进动画
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::UiService;
use crate::event;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &UiService,
    events: &mut UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    loop {
        // 1. 收取后端事件
        while let Ok(backend_event) = events.try_recv() {
            update::update(app, AppMessage::Backend(backend_event));
        }

        // 2. 派发后端命令
        for command in app.take_commands() {
            service.dispatch(command);
        }

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时）
        let msg = match event::poll_event(Duration::from_millis(100))? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };

        // 6. 更新状态
        update::update(app, msg);
    }

    Ok(())
}
