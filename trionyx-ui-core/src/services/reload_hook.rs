//! Reload the panel once a dialog opened from it has saved

use std::sync::Weak;

use async_trait::async_trait;
use trionyx_ui_transport::ResponseEnvelope;

use crate::services::{DialogController, PanelController};
use crate::traits::StepHook;
use crate::types::DialogHandle;

/// Hook attached to dialogs opened from a panel action with `reload: true`.
///
/// - a rendered step reporting `success: true` reloads the panel and closes the dialog
/// - a backend close whose status is success (or absent) reloads the panel
pub struct ReloadPanelOnSuccess {
    panel: Weak<PanelController>,
}

impl ReloadPanelOnSuccess {
    #[must_use]
    pub fn new(panel: Weak<PanelController>) -> Self {
        Self { panel }
    }

    async fn reload_panel(&self) {
        let Some(panel) = self.panel.upgrade() else {
            log::debug!("[panel] Panel controller gone, skipping reload");
            return;
        };
        if let Err(e) = panel.reload().await {
            e.log("[panel] Reload after dialog failed");
        }
    }
}

#[async_trait]
impl StepHook for ReloadPanelOnSuccess {
    async fn on_step(
        &self,
        envelope: &ResponseEnvelope,
        dialog: &DialogController,
        handle: DialogHandle,
    ) {
        if envelope.success == Some(true) {
            self.reload_panel().await;
            dialog.close_dialog(handle).await;
        }
    }

    async fn on_close(&self, envelope: &ResponseEnvelope) {
        if envelope.status.is_none() || envelope.has_success_status() {
            self.reload_panel().await;
        }
    }
}
