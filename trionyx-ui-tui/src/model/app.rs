//! 应用主状态

use trionyx_ui_core::NotifyLevel;

use super::{CommandLineState, DialogState, FocusPanel, PageState, PanelState};
use crate::message::BackendCommand;

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: NotifyLevel,
    pub text: String,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点区域
    pub focus: FocusPanel,

    /// 后端根地址（标题栏显示）
    pub base_url: String,

    /// 当前页面
    pub page: PageState,

    /// 对话框状态
    pub dialog: DialogState,

    /// 面板状态
    pub panel: PanelState,

    /// 命令行
    pub command_line: CommandLineState,

    /// 状态栏消息
    pub status_message: Option<StatusMessage>,

    /// 主循环空闲计数（忙碌动画）
    pub tick: usize,

    /// 待派发给 Backend 层的命令
    commands: Vec<BackendCommand>,
}

impl App {
    /// 创建新的应用实例，启动后先导航到 `start_path`
    pub fn new(base_url: &str, start_path: &str) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Page,
            base_url: base_url.to_string(),
            page: PageState::new(),
            dialog: DialogState::new(),
            panel: PanelState::new(),
            command_line: CommandLineState::new(),
            status_message: None,
            tick: 0,
            commands: Vec::new(),
        };

        app.push_command(BackendCommand::Navigate(start_path.to_string()));

        app
    }

    /// 排队一条 Backend 命令
    pub fn push_command(&mut self, command: BackendCommand) {
        self.commands.push(command);
    }

    /// 取出所有待派发命令
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.commands)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            level,
            text: message.into(),
        });
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new("http://localhost:8000/", "/")
    }
}
