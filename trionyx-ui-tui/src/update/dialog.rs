//! 对话框消息处理

use crate::message::{BackendCommand, DialogMessage};
use crate::model::App;

/// 处理对话框消息
pub fn update(app: &mut App, msg: DialogMessage) {
    let Some(view) = app.dialog.active.as_mut() else {
        return;
    };

    match msg {
        // 关闭总是允许；Model 等 DialogUnmounted 事件再清理
        DialogMessage::Close => app.push_command(BackendCommand::CloseDialog),

        DialogMessage::NextField => view.next_field(),
        DialogMessage::PrevField => view.prev_field(),

        DialogMessage::PrevOption if view.accepts_input() => view.cycle_option(false),
        DialogMessage::NextOption if view.accepts_input() => view.cycle_option(true),
        DialogMessage::Input(ch) if view.accepts_input() => view.input(ch),
        DialogMessage::Backspace if view.accepts_input() => view.backspace(),

        DialogMessage::Submit => {
            if view.can_submit() {
                let form = view.form_data();
                app.push_command(BackendCommand::SubmitDialog(form));
            }
        }

        DialogMessage::PrevOption
        | DialogMessage::NextOption
        | DialogMessage::Input(_)
        | DialogMessage::Backspace => {}
    }
}
