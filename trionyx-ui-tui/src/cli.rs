//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

use crate::backend::AppConfig;

/// 会话 cookie 只给出值时使用的名字
const DEFAULT_SESSION_COOKIE: &str = "sessionid";

/// Terminal client for Trionyx admin dialogs and panels
#[derive(Debug, Parser)]
#[command(name = "trionyx-tui", version, about)]
pub struct Cli {
    /// Backend base URL, overrides the config file
    #[arg(long, short = 'u')]
    pub base_url: Option<String>,

    /// Page path to open on start
    #[arg(long, short = 'p')]
    pub path: Option<String>,

    /// Session cookie, `name=value` or a bare session id
    #[arg(long, short = 's')]
    pub session: Option<String>,

    /// Config file (defaults to the user config dir)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log file (defaults to the user data dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// 把命令行覆盖项写入配置
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(path) = &self.path {
            config.start_path.clone_from(path);
        }
        if let Some(session) = &self.session {
            config.session_cookie = Some(if session.contains('=') {
                session.clone()
            } else {
                format!("{DEFAULT_SESSION_COOKIE}={session}")
            });
        }
    }
}
