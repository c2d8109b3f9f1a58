//! `:` 命令行
//!
//!     open <url> [size]       打开对话框（size: small / large / extra-large / full）
//!     panel <url>             打开面板
//!     go <path>               导航到页面（随后恢复该页面的面板）
//!     pending <path> <url>    登记目标页面的面板，导航过去时打开
//!     close                   关闭面板
//!     reload                  重新加载面板
//!     q | quit                退出

use thiserror::Error;
use trionyx_ui_core::DialogSize;

/// 解析后的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open { url: String, size: DialogSize },
    Panel(String),
    Go(String),
    Pending { path: String, url: String },
    Close,
    Reload,
    Quit,
}

/// 命令解析错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut words = input.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match (name, args.as_slice()) {
            ("open", [url]) => Ok(Self::Open {
                url: (*url).to_string(),
                size: DialogSize::default(),
            }),
            ("open", [url, size]) => Ok(Self::Open {
                url: (*url).to_string(),
                size: DialogSize::from((*size).to_string()),
            }),
            ("open", _) => Err(CommandError::Usage("open <url> [size]")),
            ("panel", [url]) => Ok(Self::Panel((*url).to_string())),
            ("panel", _) => Err(CommandError::Usage("panel <url>")),
            ("go", [path]) => Ok(Self::Go((*path).to_string())),
            ("go", _) => Err(CommandError::Usage("go <path>")),
            ("pending", [path, url]) => Ok(Self::Pending {
                path: (*path).to_string(),
                url: (*url).to_string(),
            }),
            ("pending", _) => Err(CommandError::Usage("pending <path> <url>")),
            ("close", []) => Ok(Self::Close),
            ("reload", []) => Ok(Self::Reload),
            ("q" | "quit", []) => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

/// 命令行输入状态
#[derive(Debug, Default)]
pub struct CommandLineState {
    pub active: bool,
    pub input: String,
}

impl CommandLineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.active = true;
        self.input.clear();
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.input.clear();
    }

    /// 取出输入并关闭命令行
    pub fn take(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.input)
    }
}
