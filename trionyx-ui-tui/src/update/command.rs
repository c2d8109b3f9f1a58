//! 命令行消息处理

use trionyx_ui_core::NotifyLevel;

use crate::message::{BackendCommand, CommandLineMessage};
use crate::model::{App, Command};

/// 处理命令行消息
pub fn update(app: &mut App, msg: CommandLineMessage) {
    match msg {
        CommandLineMessage::Open => {
            app.command_line.open();
            app.clear_status();
        }
        CommandLineMessage::Cancel => app.command_line.cancel(),
        CommandLineMessage::Input(ch) => app.command_line.input.push(ch),
        CommandLineMessage::Backspace => {
            // 删空后再退格即退出命令行
            if app.command_line.input.pop().is_none() {
                app.command_line.cancel();
            }
        }
        CommandLineMessage::Submit => {
            let input = app.command_line.take();
            match Command::parse(&input) {
                Ok(command) => execute(app, command),
                Err(e) => app.set_status(NotifyLevel::Warning, e.to_string()),
            }
        }
    }
}

fn execute(app: &mut App, command: Command) {
    log::debug!("Command: {command:?}");
    match command {
        Command::Open { url, size } => app.push_command(BackendCommand::OpenDialog { url, size }),
        Command::Panel(url) => app.push_command(BackendCommand::OpenPanel(url)),
        Command::Go(path) => app.push_command(BackendCommand::Navigate(path)),
        Command::Pending { path, url } => {
            app.push_command(BackendCommand::RegisterPending { path, url });
        }
        Command::Close => app.push_command(BackendCommand::ClosePanel),
        Command::Reload => app.push_command(BackendCommand::ReloadPanel),
        Command::Quit => app.should_quit = true,
    }
}
