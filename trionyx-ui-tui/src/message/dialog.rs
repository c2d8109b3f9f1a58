//! 对话框消息类型

/// 对话框相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMessage {
    /// 关闭对话框（请求进行中也允许）
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 下拉框上一个选项
    PrevOption,

    /// 下拉框下一个选项
    NextOption,

    /// 输入字符（复选框上的空格切换勾选）
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 提交表单
    Submit,
}
