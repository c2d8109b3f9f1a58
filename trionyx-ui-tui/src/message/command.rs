//! 命令行消息类型

/// 命令行相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLineMessage {
    /// 聚焦命令行
    Open,
    Cancel,
    Input(char),
    Backspace,
    /// 解析并执行输入
    Submit,
}
