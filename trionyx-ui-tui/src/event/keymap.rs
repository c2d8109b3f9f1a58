//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const COMMAND_LINE: KeyBinding = KeyBinding::key(KeyCode::Char(':'));
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::ctrl(KeyCode::Char('p'));
    pub const RELOAD_PANEL: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 面板
    pub const PANEL_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const PANEL_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const PANEL_RUN: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const PANEL_CLOSE: KeyBinding = KeyBinding::key(KeyCode::Char('x'));

    // 对话框
    pub const DIALOG_SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const DIALOG_NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const DIALOG_PREV_FIELD: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);
}
