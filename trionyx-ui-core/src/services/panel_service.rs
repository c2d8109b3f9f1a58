//! 侧边面板控制器

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::services::{DialogController, ReloadPanelOnSuccess, UiContext};
use crate::types::{ActionBehavior, NotifyLevel, OpenOptions, PanelAction, PanelContent};

#[derive(Default)]
struct PanelState {
    /// URL of the panel currently shown.
    current_url: Option<String>,
    actions: Vec<PanelAction>,
    /// Bumped by every open and close; a load only lands if it still matches.
    generation: u64,
}

/// Owner of the single shared side panel.
///
/// The panel shown on a page is persisted as `page path → panel URL` so it
/// can be restored when the page is loaded again.
pub struct PanelController {
    ctx: Arc<UiContext>,
    dialogs: Arc<DialogController>,
    state: Mutex<PanelState>,
}

impl PanelController {
    #[must_use]
    pub fn new(ctx: Arc<UiContext>, dialogs: Arc<DialogController>) -> Self {
        Self {
            ctx,
            dialogs,
            state: Mutex::new(PanelState::default()),
        }
    }

    /// Fetch `url` and show it as the panel of the current page.
    ///
    /// Panel endpoints must answer with `status: "success"`; anything else,
    /// including a missing status, is reported and leaves the panel untouched.
    ///
    /// The panel belongs to the page the call was made on: if the host has
    /// navigated away by the time the response arrives, the mapping is still
    /// stored for that page but nothing is rendered on the new one.
    pub async fn open_panel(&self, url: &str) -> CoreResult<()> {
        let (generation, path) = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            (state.generation, self.ctx.navigator.current_path())
        };
        log::info!("[panel] Loading {url} on {path}");

        let envelope = match self.ctx.transport.get(url).await {
            Ok(envelope) => envelope,
            Err(e) => {
                let error = CoreError::from(e);
                error.log("[panel] Request failed");
                self.ctx
                    .notifier
                    .notify(NotifyLevel::Error, &format!("Could not load panel: {error}"));
                return Err(error);
            }
        };

        if !envelope.has_success_status() {
            let message = envelope.failure_message();
            self.ctx.notifier.notify(NotifyLevel::Error, &message);
            let error = CoreError::Application {
                status: envelope.status.as_ref().map(|s| s.as_str().to_string()),
                message,
            };
            error.log("[panel] Backend refused panel");
            return Err(error);
        }

        let content = PanelContent::from(envelope);
        let mut state = self.state.lock().await;
        if state.generation != generation {
            log::debug!("[panel] Discarding late response for {url}");
            return Ok(());
        }

        let current_path = self.ctx.navigator.current_path();
        if current_path != path {
            drop(state);
            log::debug!("[panel] Left {path} for {current_path} while loading {url}");
            self.ctx.panel_state_store.set(&path, url).await?;
            return Ok(());
        }

        self.ctx.panel_surface.render(&content);
        self.ctx.panel_surface.set_visible(true);
        state.current_url = Some(url.to_string());
        state.actions = content.actions;
        drop(state);

        self.ctx.panel_state_store.set(&path, url).await?;
        log::debug!("[panel] {path} -> {url}");
        Ok(())
    }

    /// Hide the panel and forget it for the current page.
    pub async fn close_panel(&self) -> CoreResult<()> {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.current_url = None;
        state.actions.clear();
        self.ctx.panel_surface.clear();
        self.ctx.panel_surface.set_visible(false);

        let path = self.ctx.navigator.current_path();
        self.ctx.panel_state_store.remove(&path).await?;
        log::info!("[panel] Closed on {path}");
        Ok(())
    }

    /// Page load: reopen the panel stored for the current page.
    ///
    /// A panel left over from the previous page is hidden when the new page
    /// has none; the stored mapping of that previous page is kept.
    pub async fn restore_on_load(&self) -> CoreResult<bool> {
        let path = self.ctx.navigator.current_path();
        match self.ctx.panel_state_store.get(&path).await? {
            Some(url) => {
                log::info!("[panel] Restoring {url} on {path}");
                self.open_panel(&url).await?;
                Ok(true)
            }
            None => {
                self.hide().await;
                Ok(false)
            }
        }
    }

    /// Store the panel to show once the host has navigated to `path`.
    pub async fn register_pending_panel_url(&self, path: &str, url: &str) -> CoreResult<()> {
        self.ctx.panel_state_store.set(path, url).await?;
        log::debug!("[panel] Pending {path} -> {url}");
        Ok(())
    }

    /// Re-fetch the current panel. No-op when none is open.
    pub async fn reload(&self) -> CoreResult<()> {
        let url = self.state.lock().await.current_url.clone();
        match url {
            Some(url) => self.open_panel(&url).await,
            None => Ok(()),
        }
    }

    /// Run entry `index` of the action menu.
    pub async fn run_action(self: &Arc<Self>, index: usize) -> CoreResult<()> {
        let action = self
            .state
            .lock()
            .await
            .actions
            .get(index)
            .filter(|a| a.is_runnable())
            .cloned()
            .ok_or(CoreError::ActionNotFound(index))?;
        log::debug!("[panel] Running action '{}' -> {}", action.label, action.url);

        match action.behavior {
            ActionBehavior::Navigate => {
                self.ctx.navigator.navigate(&action.url);
                Ok(())
            }
            ActionBehavior::OpenDialog(options) => {
                let mut open = OpenOptions::sized(options.size);
                if action.reload_on_success {
                    open = open.with_hook(Arc::new(ReloadPanelOnSuccess::new(Arc::downgrade(self))));
                }
                self.dialogs.open(&action.url, open).await.map(|_| ())
            }
        }
    }

    pub async fn is_visible(&self) -> bool {
        self.state.lock().await.current_url.is_some()
    }

    pub async fn current_url(&self) -> Option<String> {
        self.state.lock().await.current_url.clone()
    }

    pub async fn actions(&self) -> Vec<PanelAction> {
        self.state.lock().await.actions.clone()
    }

    async fn hide(&self) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        if state.current_url.take().is_some() {
            state.actions.clear();
            self.ctx.panel_surface.clear();
            self.ctx.panel_surface.set_visible(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use trionyx_ui_transport::{DialogSize, TransportError};

    use super::*;
    use crate::test_utils::{TestHarness, envelope, panel_envelope};
    use crate::traits::PanelStateStore;

    #[tokio::test]
    async fn open_panel_renders_and_persists() {
        let h = TestHarness::new();
        h.navigator.set_path("/users/");
        h.transport.respond(
            "/panel/a",
            envelope(json!({
                "status": "success",
                "title": "User A",
                "theme": "dark",
                "fixed_content": "<b>A</b>",
                "content": "<p>details</p>",
                "actions": [{"label": "Edit", "url": "/a/edit", "dialog": true}],
            })),
        );

        h.panels.open_panel("/panel/a").await.unwrap();

        let rendered = h.panel_surface.last_rendered().unwrap();
        assert_eq!(rendered.title, "User A");
        assert_eq!(rendered.fixed_content, "<b>A</b>");
        assert_eq!(rendered.actions.len(), 1);
        assert!(h.panel_surface.is_visible());
        assert_eq!(
            h.store.get("/users/").await.unwrap().as_deref(),
            Some("/panel/a")
        );
        assert_eq!(h.panels.current_url().await.as_deref(), Some("/panel/a"));
    }

    #[tokio::test]
    async fn missing_status_is_a_failure_for_panels() {
        let h = TestHarness::new();
        h.transport
            .respond("/panel/a", envelope(json!({"title": "no status"})));

        let result = h.panels.open_panel("/panel/a").await;

        assert!(matches!(result, Err(CoreError::Application { status: None, .. })));
        assert!(h.panel_surface.last_rendered().is_none());
        assert!(h.store.all().await.unwrap().is_empty());
        assert_eq!(h.notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn error_status_notifies_with_message() {
        let h = TestHarness::new();
        h.transport.respond(
            "/panel/a",
            envelope(json!({"status": "error", "message": "Object not found"})),
        );

        let result = h.panels.open_panel("/panel/a").await;

        assert!(result.is_err());
        assert_eq!(
            h.notifier.messages(),
            vec![(NotifyLevel::Error, "Object not found".to_string())]
        );
        assert!(!h.panels.is_visible().await);
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let h = TestHarness::new();
        h.transport.fail(
            "/panel/a",
            TransportError::Timeout {
                url: "/panel/a".into(),
                detail: "30s".into(),
            },
        );

        let result = h.panels.open_panel("/panel/a").await;

        assert!(matches!(result, Err(CoreError::Transport(_))));
        assert_eq!(h.notifier.messages()[0].0, NotifyLevel::Error);
    }

    #[tokio::test]
    async fn last_opened_panel_is_restored() {
        let h = TestHarness::new();
        h.navigator.set_path("/users/");
        h.transport.respond("/panel/a", panel_envelope("A"));
        h.transport.respond("/panel/b", panel_envelope("B"));
        h.panels.open_panel("/panel/a").await.unwrap();
        h.panels.open_panel("/panel/b").await.unwrap();

        // page reload
        let reloaded = h.reload_page();
        reloaded.transport.respond("/panel/b", panel_envelope("B"));
        assert!(reloaded.panels.restore_on_load().await.unwrap());

        assert_eq!(reloaded.panel_surface.last_rendered().unwrap().title, "B");
        assert_eq!(reloaded.transport.requests()[0].url, "/panel/b");
    }

    #[tokio::test]
    async fn closed_panel_is_not_restored() {
        let h = TestHarness::new();
        h.navigator.set_path("/users/");
        h.transport.respond("/panel/a", panel_envelope("A"));
        h.panels.open_panel("/panel/a").await.unwrap();
        h.panels.close_panel().await.unwrap();

        assert!(h.store.get("/users/").await.unwrap().is_none());
        assert!(!h.panel_surface.is_visible());

        let reloaded = h.reload_page();
        assert!(!reloaded.panels.restore_on_load().await.unwrap());
        assert!(reloaded.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn pending_url_is_opened_on_target_page() {
        let h = TestHarness::new();
        h.navigator.set_path("/users/");
        h.panels
            .register_pending_panel_url("/groups/", "/panel/group/3")
            .await
            .unwrap();

        h.navigator.set_path("/groups/");
        h.transport
            .respond("/panel/group/3", panel_envelope("Group 3"));
        assert!(h.panels.restore_on_load().await.unwrap());
        assert_eq!(
            h.panels.current_url().await.as_deref(),
            Some("/panel/group/3")
        );
    }

    #[tokio::test]
    async fn navigating_to_page_without_panel_hides_it() {
        let h = TestHarness::new();
        h.navigator.set_path("/users/");
        h.transport.respond("/panel/a", panel_envelope("A"));
        h.panels.open_panel("/panel/a").await.unwrap();

        h.navigator.set_path("/groups/");
        assert!(!h.panels.restore_on_load().await.unwrap());

        assert!(!h.panel_surface.is_visible());
        // the previous page keeps its panel
        assert_eq!(
            h.store.get("/users/").await.unwrap().as_deref(),
            Some("/panel/a")
        );
    }

    #[tokio::test]
    async fn late_response_after_close_is_discarded() {
        let h = TestHarness::new();
        h.navigator.set_path("/users/");
        h.transport.respond("/panel/a", panel_envelope("A"));
        let gate = h.transport.hold_next();

        let (opened, closed) = tokio::join!(h.panels.open_panel("/panel/a"), async {
            let closed = h.panels.close_panel().await;
            gate.notify_one();
            closed
        });

        opened.unwrap();
        closed.unwrap();
        assert!(h.panel_surface.last_rendered().is_none());
        assert!(h.store.get("/users/").await.unwrap().is_none());
        assert!(!h.panels.is_visible().await);
    }

    #[tokio::test]
    async fn reload_without_panel_is_noop() {
        let h = TestHarness::new();
        h.panels.reload().await.unwrap();
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn navigate_action() {
        let h = TestHarness::new();
        h.transport.respond(
            "/panel/a",
            envelope(json!({
                "status": "success",
                "actions": [{"label": "View", "url": "/model/x/1/"}],
            })),
        );
        h.panels.open_panel("/panel/a").await.unwrap();

        h.panels.run_action(0).await.unwrap();

        assert_eq!(h.navigator.navigations(), vec!["/model/x/1/"]);
        assert!(!h.dialogs.is_open().await);
    }

    #[tokio::test]
    async fn dialog_action_uses_size() {
        let h = TestHarness::new();
        h.transport.respond(
            "/panel/a",
            envelope(json!({
                "status": "success",
                "actions": [{"label": "Edit", "url": "/x/1/edit", "dialog": true,
                             "dialog_options": {"size": "large"}}],
            })),
        );
        h.transport
            .respond("/x/1/edit", envelope(json!({"title": "Edit"})));
        h.panels.open_panel("/panel/a").await.unwrap();

        h.panels.run_action(0).await.unwrap();

        assert!(h.dialogs.is_open().await);
        assert_eq!(h.dialogs.size().await, Some(DialogSize::Large));
    }

    #[tokio::test]
    async fn dividers_and_out_of_range_actions_are_rejected() {
        let h = TestHarness::new();
        h.transport.respond(
            "/panel/a",
            envelope(json!({"status": "success", "actions": [{"divider": true}]})),
        );
        h.panels.open_panel("/panel/a").await.unwrap();

        assert!(matches!(
            h.panels.run_action(0).await,
            Err(CoreError::ActionNotFound(0))
        ));
        assert!(matches!(
            h.panels.run_action(5).await,
            Err(CoreError::ActionNotFound(5))
        ));
    }

    #[tokio::test]
    async fn panel_without_actions_hides_menu_then_delete_reloads_it() {
        let h = TestHarness::new();
        h.navigator.set_path("/items/");
        h.transport.respond(
            "/x/1/panel",
            envelope(json!({
                "status": "success",
                "title": "Item 1",
                "content": "<p>A</p>",
                "actions": [],
            })),
        );
        h.panels.open_panel("/x/1/panel").await.unwrap();

        let rendered = h.panel_surface.last_rendered().unwrap();
        assert_eq!(rendered.title, "Item 1");
        assert_eq!(rendered.content, "<p>A</p>");
        assert!(!rendered.has_actions());

        h.transport.respond(
            "/x/1/panel",
            envelope(json!({
                "status": "success",
                "title": "Item 1",
                "content": "<p>A</p>",
                "actions": [{"label": "Delete", "url": "/x/1/delete", "dialog": true,
                             "dialog_options": {}, "reload": true}],
            })),
        );
        h.panels.open_panel("/x/1/panel").await.unwrap();
        let rendered = h.panel_surface.last_rendered().unwrap();
        assert_eq!(rendered.actions.len(), 1);
        assert_eq!(rendered.actions[0].label, "Delete");

        h.transport.respond(
            "/x/1/delete",
            envelope(json!({"title": "Delete item?", "submit_label": "Delete"})),
        );
        h.panels.run_action(0).await.unwrap();
        assert!(h.dialogs.is_open().await);
        assert_eq!(h.dialogs.size().await, Some(DialogSize::Default));

        h.transport.respond(
            "/x/1/delete",
            envelope(json!({"status": "success", "close": true})),
        );
        h.transport
            .respond("/x/1/panel", panel_envelope("Item 1 (updated)"));
        h.dialogs
            .submit(trionyx_ui_transport::FormData::new())
            .await
            .unwrap();

        assert!(!h.dialogs.is_open().await);
        let panel_fetches = h
            .transport
            .requests()
            .iter()
            .filter(|r| r.url == "/x/1/panel")
            .count();
        assert_eq!(panel_fetches, 3);
        assert_eq!(
            h.panel_surface.last_rendered().unwrap().title,
            "Item 1 (updated)"
        );
    }

    #[tokio::test]
    async fn navigation_during_load_keeps_panel_on_its_page() {
        let h = TestHarness::new();
        h.navigator.set_path("/users/");
        h.transport.respond("/panel/a", panel_envelope("A"));
        let gate = h.transport.hold_next();

        let (opened, ()) = tokio::join!(h.panels.open_panel("/panel/a"), async {
            h.navigator.set_path("/groups/");
            gate.notify_one();
        });

        opened.unwrap();
        assert_eq!(
            h.store.get("/users/").await.unwrap().as_deref(),
            Some("/panel/a")
        );
        assert!(h.store.get("/groups/").await.unwrap().is_none());
        assert!(h.panel_surface.last_rendered().is_none());
        assert!(!h.panels.is_visible().await);
    }

    #[tokio::test]
    async fn reload_action_reloads_and_closes_on_saved_form() {
        let h = TestHarness::new();
        h.transport.respond(
            "/x/1/panel",
            envelope(json!({
                "status": "success",
                "actions": [{"label": "Edit", "url": "/x/1/edit", "dialog": true, "reload": true}],
            })),
        );
        h.panels.open_panel("/x/1/panel").await.unwrap();
        h.transport.respond(
            "/x/1/edit",
            envelope(json!({"title": "Edit", "submit_label": "Save"})),
        );
        h.panels.run_action(0).await.unwrap();

        h.transport.respond(
            "/x/1/edit",
            envelope(json!({"title": "Edit", "success": true})),
        );
        h.transport.respond("/x/1/panel", panel_envelope("Saved"));
        h.dialogs
            .submit(trionyx_ui_transport::FormData::new())
            .await
            .unwrap();

        assert!(!h.dialogs.is_open().await);
        assert_eq!(h.panel_surface.last_rendered().unwrap().title, "Saved");
    }

    #[tokio::test]
    async fn reload_action_keeps_panel_on_unsaved_step() {
        let h = TestHarness::new();
        h.transport.respond(
            "/x/1/panel",
            envelope(json!({
                "status": "success",
                "actions": [{"label": "Edit", "url": "/x/1/edit", "dialog": true, "reload": true}],
            })),
        );
        h.panels.open_panel("/x/1/panel").await.unwrap();
        h.transport.respond(
            "/x/1/edit",
            envelope(json!({"title": "Edit", "submit_label": "Save", "success": false})),
        );

        h.panels.run_action(0).await.unwrap();

        assert!(h.dialogs.is_open().await);
        assert_eq!(h.transport.requests().len(), 2);
    }
}
