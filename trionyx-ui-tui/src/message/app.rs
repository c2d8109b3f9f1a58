//! 应用主消息枚举

use super::{BackendEvent, CommandLineMessage, DialogMessage, PanelMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 在页面与面板之间切换焦点
    ToggleFocus,

    /// 对话框相关消息
    Dialog(DialogMessage),

    /// 面板相关消息
    Panel(PanelMessage),

    /// 命令行相关消息
    CommandLine(CommandLineMessage),

    /// Backend 层回调
    Backend(BackendEvent),

    /// 主循环空闲一轮（驱动忙碌动画）
    Tick,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
