//! 面板消息类型

/// 面板相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage {
    SelectPrevious,
    SelectNext,
    /// 执行选中的操作
    RunSelected,
    /// 关闭面板并忘记当前页面的面板
    Close,
    Reload,
    /// 焦点回到页面
    Blur,
}
