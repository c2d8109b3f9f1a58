//! 面板状态

use trionyx_ui_core::PanelContent;

/// 面板状态（由 Backend 事件驱动）
#[derive(Debug, Default)]
pub struct PanelState {
    pub visible: bool,
    pub content: Option<PanelContent>,
    /// 选中的操作索引（始终指向可执行的操作）
    pub selected: Option<usize>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换内容，选中第一个可执行操作
    pub fn render(&mut self, content: PanelContent) {
        self.selected = content.actions.iter().position(|a| a.is_runnable());
        self.content = Some(content);
    }

    pub fn clear(&mut self) {
        self.content = None;
        self.selected = None;
    }

    /// 向后选择，跳过分隔线
    pub fn select_next(&mut self) {
        self.step(1);
    }

    /// 向前选择，跳过分隔线
    pub fn select_previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, direction: isize) {
        let Some(content) = &self.content else {
            return;
        };
        let Some(current) = self.selected else {
            return;
        };
        let len = content.actions.len();
        let mut index = current;
        for _ in 0..len {
            index = (index + len).wrapping_add_signed(direction) % len;
            if content.actions[index].is_runnable() {
                self.selected = Some(index);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use trionyx_ui_core::{ActionBehavior, ActionStyle, PanelAction};

    use super::*;

    fn action(label: &str, divider: bool) -> PanelAction {
        PanelAction {
            label: label.to_string(),
            url: if divider { String::new() } else { format!("/{label}/") },
            style: ActionStyle::Default,
            behavior: ActionBehavior::Navigate,
            reload_on_success: false,
            divider,
        }
    }

    fn content() -> PanelContent {
        PanelContent {
            title: "User 1".into(),
            actions: vec![
                action("", true),
                action("edit", false),
                action("", true),
                action("delete", false),
            ],
            ..PanelContent::default()
        }
    }

    #[test]
    fn render_selects_first_runnable() {
        let mut panel = PanelState::new();
        panel.render(content());
        assert_eq!(panel.selected, Some(1));
    }

    #[test]
    fn selection_skips_dividers_and_wraps() {
        let mut panel = PanelState::new();
        panel.render(content());

        panel.select_next();
        assert_eq!(panel.selected, Some(3));
        panel.select_next();
        assert_eq!(panel.selected, Some(1));
        panel.select_previous();
        assert_eq!(panel.selected, Some(3));
    }

    #[test]
    fn no_actions_no_selection() {
        let mut panel = PanelState::new();
        panel.render(PanelContent::default());
        panel.select_next();
        assert_eq!(panel.selected, None);
    }
}
