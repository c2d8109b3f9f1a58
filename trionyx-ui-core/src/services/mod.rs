//! 控制器层

mod dialog_service;
mod panel_service;
mod reload_hook;

pub use dialog_service::DialogController;
pub use panel_service::PanelController;
pub use reload_hook::ReloadPanelOnSuccess;

use std::sync::Arc;

use trionyx_ui_transport::Transport;

use crate::traits::{DialogSurface, Navigator, Notifier, PanelStateStore, PanelSurface};

/// 界面上下文 - 持有所有依赖
///
/// 宿主层需要创建此上下文，并注入平台特定的渲染与存储实现。
pub struct UiContext {
    /// 请求通道
    pub transport: Arc<dyn Transport>,
    /// 对话框渲染
    pub dialog_surface: Arc<dyn DialogSurface>,
    /// 面板渲染
    pub panel_surface: Arc<dyn PanelSurface>,
    /// 页面导航
    pub navigator: Arc<dyn Navigator>,
    /// 用户提示
    pub notifier: Arc<dyn Notifier>,
    /// 面板状态持久化
    pub panel_state_store: Arc<dyn PanelStateStore>,
}

impl UiContext {
    /// 创建界面上下文
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        dialog_surface: Arc<dyn DialogSurface>,
        panel_surface: Arc<dyn PanelSurface>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        panel_state_store: Arc<dyn PanelStateStore>,
    ) -> Self {
        Self {
            transport,
            dialog_surface,
            panel_surface,
            navigator,
            notifier,
            panel_state_store,
        }
    }
}
