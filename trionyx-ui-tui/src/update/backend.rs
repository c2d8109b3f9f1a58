//! Backend 事件处理：把 surface 回调落到 Model

use crate::message::{BackendCommand, BackendEvent};
use crate::model::{App, FocusPanel};

/// 处理 Backend 事件
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::DialogMounted { handle, size } => {
            if let Some(previous) = &app.dialog.active {
                log::debug!("{} replaced by {handle}", previous.handle);
            }
            log::debug!("{handle} mounted ({})", size.as_str());
            app.dialog.mount(handle, size);
        }
        BackendEvent::DialogUnmounted => app.dialog.close(),
        BackendEvent::PanelRendered(content) => app.panel.render(content),
        BackendEvent::PanelCleared => app.panel.clear(),
        BackendEvent::PanelVisible(visible) => {
            app.panel.visible = visible;
            if visible {
                app.focus = FocusPanel::Panel;
            } else {
                app.focus = FocusPanel::Page;
            }
        }
        BackendEvent::Navigated(path) => {
            app.page.visit(&path);
            app.push_command(BackendCommand::RestorePanel);
        }
        BackendEvent::Notification(level, message) => app.set_status(level, message),
        dialog_event => update_dialog(app, dialog_event),
    }
}

/// 挂载中对话框的内容事件；没有对话框时丢弃
fn update_dialog(app: &mut App, event: BackendEvent) {
    let Some(view) = app.dialog.active.as_mut() else {
        log::debug!("Dropping {event:?}: no dialog mounted");
        return;
    };

    match event {
        BackendEvent::DialogLoading => view.show_loading(),
        BackendEvent::DialogTitle(title) => view.title = title,
        BackendEvent::DialogBody(html) => view.set_body(&html),
        BackendEvent::DialogFooter(label) => view.submit_label = label,
        BackendEvent::DialogBusy(busy) => view.set_busy(busy),
        BackendEvent::DialogFailure(message) => view.show_failure(&message),
        BackendEvent::DialogWidgets => view.initialize_widgets(),
        _ => {}
    }
}
