//! 核心服务
//!
//! 封装 trionyx-ui-core 的两个控制器，
//! 把 UI 层产生的 BackendCommand 派发到 tokio 运行时上执行

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use trionyx_ui_core::{
    CoreError, DialogController, Navigator, Notifier, NotifyLevel, OpenOptions, PanelController,
    PanelStateStore, Transport, UiContext,
};
use trionyx_ui_transport::HttpTransport;

use super::config_service::AppConfig;
use super::panel_state_repository::JsonFilePanelStateStore;
use super::surfaces::{ChannelDialogSurface, ChannelNavigator, ChannelNotifier, ChannelPanelSurface};
use crate::message::{BackendCommand, BackendEvent};

/// TUI 核心服务
///
/// 持有控制器实例，提供给主循环调用
pub struct UiService {
    dialogs: Arc<DialogController>,
    panels: Arc<PanelController>,
    navigator: Arc<ChannelNavigator>,
    notifier: Arc<ChannelNotifier>,
    runtime: Handle,
}

impl UiService {
    /// 创建核心服务实例（HTTP 传输 + JSON 文件面板状态）
    pub fn new(
        config: &AppConfig,
        events: UnboundedSender<BackendEvent>,
        runtime: Handle,
    ) -> Result<Self> {
        let transport =
            HttpTransport::new(config.transport_config()).context("Failed to create HTTP client")?;
        let base_url = transport.base_url().clone();
        Ok(Self::with_parts(
            Arc::new(transport),
            Arc::new(JsonFilePanelStateStore::new()),
            ChannelNavigator::new(base_url, events.clone()),
            events,
            runtime,
        ))
    }

    /// 用给定的传输层与存储组装服务
    pub fn with_parts(
        transport: Arc<dyn Transport>,
        store: Arc<dyn PanelStateStore>,
        navigator: ChannelNavigator,
        events: UnboundedSender<BackendEvent>,
        runtime: Handle,
    ) -> Self {
        // 1. 平台实现
        let navigator = Arc::new(navigator);
        let notifier = Arc::new(ChannelNotifier::new(events.clone()));
        let dialog_surface = Arc::new(ChannelDialogSurface::new(events.clone()));
        let panel_surface = Arc::new(ChannelPanelSurface::new(events));

        // 2. 上下文
        let ctx = Arc::new(UiContext::new(
            transport,
            dialog_surface,
            panel_surface,
            navigator.clone(),
            notifier.clone(),
            store,
        ));

        // 3. 控制器
        let dialogs = Arc::new(DialogController::new(ctx.clone()));
        let panels = Arc::new(PanelController::new(ctx, dialogs.clone()));

        Self {
            dialogs,
            panels,
            navigator,
            notifier,
            runtime,
        }
    }

    /// 执行一条命令；网络相关操作在运行时上异步完成，结果经 surface 回到主循环
    pub fn dispatch(&self, command: BackendCommand) {
        log::debug!("Dispatching {command:?}");
        match command {
            BackendCommand::Navigate(path) => self.navigator.navigate(&path),

            BackendCommand::OpenDialog { url, size } => {
                let dialogs = self.dialogs.clone();
                self.spawn("Open dialog", async move {
                    dialogs.open(&url, OpenOptions::sized(size)).await.map(|_| ())
                });
            }

            BackendCommand::SubmitDialog(form) => {
                let dialogs = self.dialogs.clone();
                self.spawn("Submit dialog", async move {
                    dialogs.submit(form).await.map(|_| ())
                });
            }

            BackendCommand::CloseDialog => {
                let dialogs = self.dialogs.clone();
                self.runtime.spawn(async move {
                    dialogs.close().await;
                });
            }

            BackendCommand::OpenPanel(url) => {
                let panels = self.panels.clone();
                self.spawn("Open panel", async move { panels.open_panel(&url).await });
            }

            BackendCommand::ClosePanel => {
                let panels = self.panels.clone();
                self.spawn("Close panel", async move { panels.close_panel().await });
            }

            BackendCommand::ReloadPanel => {
                let panels = self.panels.clone();
                self.spawn("Reload panel", async move { panels.reload().await });
            }

            BackendCommand::RunAction(index) => {
                let panels = self.panels.clone();
                self.spawn("Panel action", async move { panels.run_action(index).await });
            }

            BackendCommand::RegisterPending { path, url } => {
                let panels = self.panels.clone();
                let notifier = self.notifier.clone();
                self.spawn("Register pending panel", async move {
                    panels.register_pending_panel_url(&path, &url).await?;
                    notifier.notify(NotifyLevel::Info, &format!("{url} will open on {path}"));
                    Ok(())
                });
            }

            BackendCommand::RestorePanel => {
                let panels = self.panels.clone();
                self.spawn("Restore panel", async move {
                    panels.restore_on_load().await.map(|_| ())
                });
            }
        }
    }

    /// 在运行时上执行并记录失败
    ///
    /// 控制器已经通过 surface / notifier 反馈了失败，
    /// 这里只补充存储类错误的提示
    fn spawn<F>(&self, context: &'static str, task: F)
    where
        F: std::future::Future<Output = Result<(), CoreError>> + Send + 'static,
    {
        let notifier = self.notifier.clone();
        self.runtime.spawn(async move {
            if let Err(e) = task.await {
                e.log(context);
                if matches!(e, CoreError::StorageError(_) | CoreError::SerializationError(_)) {
                    notifier.notify(NotifyLevel::Error, &format!("{context}: {e}"));
                }
            }
        });
    }
}
