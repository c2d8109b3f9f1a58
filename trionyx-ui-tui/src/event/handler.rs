//! 事件处理：按键 → 消息

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CommandLineMessage, DialogMessage, PanelMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 命令行优先，其次是对话框
    if app.command_line.active {
        return handle_command_line_keys(key);
    }
    if app.dialog.is_open() {
        return handle_dialog_keys(key);
    }

    // `:` 在部分终端上带 SHIFT
    if key.code == DefaultKeymap::COMMAND_LINE.code {
        return AppMessage::CommandLine(CommandLineMessage::Open);
    }
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::RELOAD_PANEL.matches(&key) {
        return AppMessage::Panel(PanelMessage::Reload);
    }

    if app.focus.is_panel() && app.panel.visible {
        handle_panel_keys(key)
    } else if DefaultKeymap::BACK.matches(&key) {
        AppMessage::ClearStatus
    } else {
        AppMessage::Noop
    }
}

/// 处理命令行的按键
fn handle_command_line_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc => CommandLineMessage::Cancel,
        KeyCode::Enter => CommandLineMessage::Submit,
        KeyCode::Backspace => CommandLineMessage::Backspace,
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            CommandLineMessage::Input(ch)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::CommandLine(msg)
}

/// 处理对话框中的按键
fn handle_dialog_keys(key: KeyEvent) -> AppMessage {
    // Esc 始终可以关闭对话框，请求进行中也一样
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Close);
    }
    if DefaultKeymap::DIALOG_SUBMIT.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Submit);
    }
    if DefaultKeymap::DIALOG_NEXT_FIELD.matches(&key) {
        return AppMessage::Dialog(DialogMessage::NextField);
    }
    // 部分终端上 BackTab 不带 SHIFT
    if DefaultKeymap::DIALOG_PREV_FIELD.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::Dialog(DialogMessage::PrevField);
    }

    let msg = match key.code {
        KeyCode::Left => DialogMessage::PrevOption,
        KeyCode::Right => DialogMessage::NextOption,
        KeyCode::Backspace => DialogMessage::Backspace,
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            DialogMessage::Input(ch)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Dialog(msg)
}

/// 处理面板的按键
fn handle_panel_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::PANEL_UP.matches(&key) || key.code == KeyCode::Char('k') {
        PanelMessage::SelectPrevious
    } else if DefaultKeymap::PANEL_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        PanelMessage::SelectNext
    } else if DefaultKeymap::PANEL_RUN.matches(&key) {
        PanelMessage::RunSelected
    } else if DefaultKeymap::PANEL_CLOSE.matches(&key) {
        PanelMessage::Close
    } else if DefaultKeymap::BACK.matches(&key) {
        PanelMessage::Blur
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Panel(msg)
}
