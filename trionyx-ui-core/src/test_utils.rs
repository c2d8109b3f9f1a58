//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use trionyx_ui_transport::{
    DialogSize, ResponseEnvelope, Transport, TransportError, TransportRequest,
};

use crate::services::{DialogController, PanelController, UiContext};
use crate::traits::{
    DialogSurface, InMemoryPanelStateStore, Navigator, Notifier, PanelSurface, StepHook,
};
use crate::types::{DialogHandle, NotifyLevel, PanelContent};

// ===== MockTransport =====

/// Scripted transport: each URL answers from its own queue, in order.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<Result<ResponseEnvelope, TransportError>>>>,
    requests: Mutex<Vec<TransportRequest>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl MockTransport {
    pub fn respond(&self, url: &str, envelope: ResponseEnvelope) {
        self.push(url, Ok(envelope));
    }

    pub fn fail(&self, url: &str, error: TransportError) {
        self.push(url, Err(error));
    }

    /// The next request blocks until the returned `Notify` is signalled.
    pub fn hold_next(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, url: &str, response: Result<ResponseEnvelope, TransportError>) {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<ResponseEnvelope, TransportError> {
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .unwrap()
            .get_mut(&url)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(TransportError::HttpStatus {
                    url,
                    status: 404,
                    body: "no scripted response".to_string(),
                })
            })
    }
}

// ===== RecordingDialogSurface =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    Mount(DialogHandle, DialogSize),
    Loading,
    Title(String),
    Body(String),
    Footer(Option<String>),
    Busy(bool),
    Failure(String),
    Widgets,
    Unmount,
}

#[derive(Default)]
pub struct RecordingDialogSurface {
    events: Mutex<Vec<DialogEvent>>,
}

impl RecordingDialogSurface {
    pub fn events(&self) -> Vec<DialogEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.events
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|e| match e {
                DialogEvent::Mount(..) => Some(true),
                DialogEvent::Unmount => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn title(&self) -> String {
        self.last(|e| match e {
            DialogEvent::Title(t) => Some(t.clone()),
            _ => None,
        })
        .unwrap_or_default()
    }

    pub fn body(&self) -> String {
        self.last(|e| match e {
            DialogEvent::Body(b) => Some(b.clone()),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// `None` if no footer was ever set.
    pub fn footer(&self) -> Option<Option<String>> {
        self.last(|e| match e {
            DialogEvent::Footer(f) => Some(f.clone()),
            _ => None,
        })
    }

    fn last<T>(&self, pick: impl Fn(&DialogEvent) -> Option<T>) -> Option<T> {
        self.events.lock().unwrap().iter().rev().find_map(pick)
    }

    fn record(&self, event: DialogEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl DialogSurface for RecordingDialogSurface {
    fn mount(&self, handle: DialogHandle, size: DialogSize) {
        self.record(DialogEvent::Mount(handle, size));
    }

    fn show_loading(&self) {
        self.record(DialogEvent::Loading);
    }

    fn set_title(&self, title: &str) {
        self.record(DialogEvent::Title(title.to_string()));
    }

    fn set_body(&self, html: &str) {
        self.record(DialogEvent::Body(html.to_string()));
    }

    fn set_footer(&self, submit_label: Option<&str>) {
        self.record(DialogEvent::Footer(submit_label.map(str::to_string)));
    }

    fn set_busy(&self, busy: bool) {
        self.record(DialogEvent::Busy(busy));
    }

    fn show_failure(&self, message: &str) {
        self.record(DialogEvent::Failure(message.to_string()));
    }

    fn initialize_widgets(&self) {
        self.record(DialogEvent::Widgets);
    }

    fn unmount(&self) {
        self.record(DialogEvent::Unmount);
    }
}

// ===== RecordingPanelSurface =====

#[derive(Default)]
pub struct RecordingPanelSurface {
    rendered: Mutex<Vec<PanelContent>>,
    visible: Mutex<bool>,
}

impl RecordingPanelSurface {
    /// Content of the last render, `None` if never rendered or cleared since.
    pub fn last_rendered(&self) -> Option<PanelContent> {
        self.rendered.lock().unwrap().last().cloned()
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.lock().unwrap()
    }
}

impl PanelSurface for RecordingPanelSurface {
    fn render(&self, content: &PanelContent) {
        self.rendered.lock().unwrap().push(content.clone());
    }

    fn clear(&self) {
        self.rendered.lock().unwrap().clear();
    }

    fn set_visible(&self, visible: bool) {
        *self.visible.lock().unwrap() = visible;
    }
}

// ===== RecordingNavigator / RecordingNotifier =====

pub struct RecordingNavigator {
    path: Mutex<String>,
    navigations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(path: &str) -> Self {
        Self {
            path: Mutex::new(path.to_string()),
            navigations: Mutex::new(Vec::new()),
        }
    }

    pub fn set_path(&self, path: &str) {
        *self.path.lock().unwrap() = path.to_string();
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }

    fn navigate(&self, url: &str) {
        self.navigations.lock().unwrap().push(url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotifyLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotifyLevel, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotifyLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

// ===== RecordingHook =====

#[derive(Default)]
pub struct RecordingHook {
    steps: Mutex<Vec<String>>,
    closes: Mutex<usize>,
}

impl RecordingHook {
    /// Titles of the rendered steps.
    pub fn steps(&self) -> Vec<String> {
        self.steps.lock().unwrap().clone()
    }

    pub fn closes(&self) -> usize {
        *self.closes.lock().unwrap()
    }
}

#[async_trait]
impl StepHook for RecordingHook {
    async fn on_step(&self, envelope: &ResponseEnvelope, _: &DialogController, _: DialogHandle) {
        self.steps.lock().unwrap().push(envelope.title.clone());
    }

    async fn on_close(&self, _: &ResponseEnvelope) {
        *self.closes.lock().unwrap() += 1;
    }
}

// ===== 工厂方法 =====

/// Controllers wired to recording mocks.
pub struct TestHarness {
    pub transport: Arc<MockTransport>,
    pub dialog_surface: Arc<RecordingDialogSurface>,
    pub panel_surface: Arc<RecordingPanelSurface>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub store: Arc<InMemoryPanelStateStore>,
    pub dialogs: Arc<DialogController>,
    pub panels: Arc<PanelController>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_store(
            Arc::new(InMemoryPanelStateStore::new()),
            Arc::new(RecordingNavigator::new("/")),
        )
    }

    /// Simulate a page reload: fresh controllers and surfaces, same persisted
    /// state and page path.
    pub fn reload_page(&self) -> Self {
        let navigator = RecordingNavigator::new(&self.navigator.current_path());
        Self::with_store(self.store.clone(), Arc::new(navigator))
    }

    fn with_store(store: Arc<InMemoryPanelStateStore>, navigator: Arc<RecordingNavigator>) -> Self {
        let transport = Arc::new(MockTransport::default());
        let dialog_surface = Arc::new(RecordingDialogSurface::default());
        let panel_surface = Arc::new(RecordingPanelSurface::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = Arc::new(UiContext::new(
            transport.clone(),
            dialog_surface.clone(),
            panel_surface.clone(),
            navigator.clone(),
            notifier.clone(),
            store.clone(),
        ));
        let dialogs = Arc::new(DialogController::new(ctx.clone()));
        let panels = Arc::new(PanelController::new(ctx, dialogs.clone()));
        Self {
            transport,
            dialog_surface,
            panel_surface,
            navigator,
            notifier,
            store,
            dialogs,
            panels,
        }
    }
}

/// Envelope from JSON, going through the same deserializer as the wire.
pub fn envelope(value: serde_json::Value) -> ResponseEnvelope {
    serde_json::from_value(value).unwrap()
}

/// Successful panel envelope with a title.
pub fn panel_envelope(title: &str) -> ResponseEnvelope {
    envelope(serde_json::json!({"status": "success", "title": title}))
}
