//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧页面区
    #[default]
    Page,
    /// 右侧面板
    Panel,
}

impl FocusPanel {
    /// 切换到另一个区域
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Page => FocusPanel::Panel,
            FocusPanel::Panel => FocusPanel::Page,
        }
    }

    /// 是否是面板
    pub fn is_panel(self) -> bool {
        matches!(self, FocusPanel::Panel)
    }
}
