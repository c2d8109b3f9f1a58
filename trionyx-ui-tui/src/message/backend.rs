//! Backend 层与 UI 之间的双向消息
//!
//!     BackendEvent     Backend → UI   surface / navigator / notifier 的回调
//!     BackendCommand   UI → Backend   update 产生、主循环派发的控制器操作

use trionyx_ui_core::{DialogHandle, DialogSize, FormData, NotifyLevel, PanelContent};

/// surface 回调，经通道送回主循环
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    // === 对话框 ===
    DialogMounted {
        handle: DialogHandle,
        size: DialogSize,
    },
    DialogLoading,
    DialogTitle(String),
    /// 服务端 HTML
    DialogBody(String),
    DialogFooter(Option<String>),
    DialogBusy(bool),
    DialogFailure(String),
    DialogWidgets,
    DialogUnmounted,

    // === 面板 ===
    PanelRendered(PanelContent),
    PanelCleared,
    PanelVisible(bool),

    // === 页面 ===
    /// 导航完成，附带新的页面路径
    Navigated(String),
    Notification(NotifyLevel, String),
}

/// 需要在异步运行时上执行的控制器操作
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    OpenDialog { url: String, size: DialogSize },
    SubmitDialog(FormData),
    CloseDialog,
    OpenPanel(String),
    ClosePanel,
    ReloadPanel,
    RunAction(usize),
    Navigate(String),
    RegisterPending { path: String, url: String },
    /// 页面加载后恢复该页面的面板
    RestorePanel,
}
