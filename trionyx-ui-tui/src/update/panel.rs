//! 面板消息处理

use crate::message::{BackendCommand, PanelMessage};
use crate::model::{App, FocusPanel};

/// 处理面板消息
pub fn update(app: &mut App, msg: PanelMessage) {
    match msg {
        PanelMessage::SelectPrevious => app.panel.select_previous(),
        PanelMessage::SelectNext => app.panel.select_next(),
        PanelMessage::RunSelected => {
            if let Some(index) = app.panel.selected {
                app.push_command(BackendCommand::RunAction(index));
            }
        }
        PanelMessage::Close => app.push_command(BackendCommand::ClosePanel),
        PanelMessage::Reload => app.push_command(BackendCommand::ReloadPanel),
        PanelMessage::Blur => app.focus = FocusPanel::Page,
    }
}
