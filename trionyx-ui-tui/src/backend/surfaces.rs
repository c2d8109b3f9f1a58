//! 终端平台实现：surface / navigator / notifier
//!
//! 控制器在 tokio 任务里调用这些实现，
//! 它们只把调用翻译成 BackendEvent 发回主循环，由 update 层修改 Model。

use std::sync::{PoisonError, RwLock};

use tokio::sync::mpsc::UnboundedSender;
use trionyx_ui_core::{
    DialogHandle, DialogSize, DialogSurface, Navigator, Notifier, NotifyLevel, PanelContent,
    PanelSurface,
};
use url::Url;

use crate::message::BackendEvent;

/// 发送事件；主循环已退出时丢弃
fn emit(events: &UnboundedSender<BackendEvent>, event: BackendEvent) {
    if events.send(event).is_err() {
        log::debug!("UI loop closed, dropping backend event");
    }
}

// ===== 对话框 =====

pub struct ChannelDialogSurface {
    events: UnboundedSender<BackendEvent>,
}

impl ChannelDialogSurface {
    pub fn new(events: UnboundedSender<BackendEvent>) -> Self {
        Self { events }
    }
}

impl DialogSurface for ChannelDialogSurface {
    fn mount(&self, handle: DialogHandle, size: DialogSize) {
        emit(&self.events, BackendEvent::DialogMounted { handle, size });
    }

    fn show_loading(&self) {
        emit(&self.events, BackendEvent::DialogLoading);
    }

    fn set_title(&self, title: &str) {
        emit(&self.events, BackendEvent::DialogTitle(title.to_string()));
    }

    fn set_body(&self, html: &str) {
        emit(&self.events, BackendEvent::DialogBody(html.to_string()));
    }

    fn set_footer(&self, submit_label: Option<&str>) {
        emit(
            &self.events,
            BackendEvent::DialogFooter(submit_label.map(str::to_string)),
        );
    }

    fn set_busy(&self, busy: bool) {
        emit(&self.events, BackendEvent::DialogBusy(busy));
    }

    fn show_failure(&self, message: &str) {
        emit(&self.events, BackendEvent::DialogFailure(message.to_string()));
    }

    fn initialize_widgets(&self) {
        emit(&self.events, BackendEvent::DialogWidgets);
    }

    fn unmount(&self) {
        emit(&self.events, BackendEvent::DialogUnmounted);
    }
}

// ===== 面板 =====

pub struct ChannelPanelSurface {
    events: UnboundedSender<BackendEvent>,
}

impl ChannelPanelSurface {
    pub fn new(events: UnboundedSender<BackendEvent>) -> Self {
        Self { events }
    }
}

impl PanelSurface for ChannelPanelSurface {
    fn render(&self, content: &PanelContent) {
        emit(&self.events, BackendEvent::PanelRendered(content.clone()));
    }

    fn clear(&self) {
        emit(&self.events, BackendEvent::PanelCleared);
    }

    fn set_visible(&self, visible: bool) {
        emit(&self.events, BackendEvent::PanelVisible(visible));
    }
}

// ===== 导航 =====

/// 页面导航
///
/// 当前路径保存在这里供控制器同步读取；
/// 导航先更新路径，再通知主循环（主循环随后触发面板恢复）。
pub struct ChannelNavigator {
    base_url: Url,
    path: RwLock<String>,
    events: UnboundedSender<BackendEvent>,
}

impl ChannelNavigator {
    pub fn new(base_url: Url, events: UnboundedSender<BackendEvent>) -> Self {
        Self {
            base_url,
            path: RwLock::new("/".to_string()),
            events,
        }
    }

    /// 相对当前页面解析，只保留路径部分；其他源的地址返回 None
    fn page_path(&self, url: &str) -> Option<String> {
        let current = self
            .base_url
            .join(&self.current_path())
            .unwrap_or_else(|_| self.base_url.clone());
        match current.join(url) {
            Ok(resolved) if resolved.origin() == self.base_url.origin() => {
                Some(resolved.path().to_string())
            }
            Ok(resolved) => {
                log::warn!("Not following cross-origin navigation to {resolved}");
                None
            }
            Err(e) => {
                log::warn!("Cannot resolve navigation target '{url}': {e}");
                None
            }
        }
    }
}

impl Navigator for ChannelNavigator {
    fn current_path(&self) -> String {
        self.path
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn navigate(&self, url: &str) {
        let Some(path) = self.page_path(url) else {
            emit(
                &self.events,
                BackendEvent::Notification(
                    NotifyLevel::Warning,
                    format!("Cannot open {url} in the terminal"),
                ),
            );
            return;
        };
        log::info!("Navigating to {path}");
        *self.path.write().unwrap_or_else(PoisonError::into_inner) = path.clone();
        emit(&self.events, BackendEvent::Navigated(path));
    }
}

// ===== 提示 =====

pub struct ChannelNotifier {
    events: UnboundedSender<BackendEvent>,
}

impl ChannelNotifier {
    pub fn new(events: UnboundedSender<BackendEvent>) -> Self {
        Self { events }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, level: NotifyLevel, message: &str) {
        emit(
            &self.events,
            BackendEvent::Notification(level, message.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tokio::sync::mpsc::unbounded_channel;

    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8000/").unwrap()
    }

    #[test]
    fn navigation_updates_path_before_event() {
        let (tx, mut rx) = unbounded_channel();
        let navigator = ChannelNavigator::new(base(), tx);

        navigator.navigate("http://localhost:8000/users/1/?tab=general");

        assert_eq!(navigator.current_path(), "/users/1/");
        assert_eq!(rx.try_recv().unwrap(), BackendEvent::Navigated("/users/1/".into()));
    }

    #[test]
    fn relative_navigation_resolves_against_base() {
        let (tx, _rx) = unbounded_channel();
        let navigator = ChannelNavigator::new(base(), tx);
        navigator.navigate("/groups/");
        navigator.navigate("2/");
        assert_eq!(navigator.current_path(), "/groups/2/");
    }

    #[test]
    fn cross_origin_navigation_is_refused() {
        let (tx, mut rx) = unbounded_channel();
        let navigator = ChannelNavigator::new(base(), tx);
        navigator.navigate("/users/");
        rx.try_recv().unwrap();

        navigator.navigate("https://example.com/login/");

        assert_eq!(navigator.current_path(), "/users/");
        assert_eq!(
            rx.try_recv().unwrap(),
            BackendEvent::Notification(
                NotifyLevel::Warning,
                "Cannot open https://example.com/login/ in the terminal".into()
            )
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dialog_calls_arrive_in_order() {
        let (tx, mut rx) = unbounded_channel();
        let surface = ChannelDialogSurface::new(tx);
        surface.set_title("Edit");
        surface.set_footer(Some("Save"));
        surface.unmount();

        assert_eq!(rx.try_recv().unwrap(), BackendEvent::DialogTitle("Edit".into()));
        assert_eq!(
            rx.try_recv().unwrap(),
            BackendEvent::DialogFooter(Some("Save".into()))
        );
        assert_eq!(rx.try_recv().unwrap(), BackendEvent::DialogUnmounted);
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = unbounded_channel();
        drop(rx);
        ChannelNotifier::new(tx).notify(NotifyLevel::Info, "gone");
    }
}
