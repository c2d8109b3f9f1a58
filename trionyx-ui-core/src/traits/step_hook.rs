//! Per-dialog step callbacks

use async_trait::async_trait;
use trionyx_ui_transport::ResponseEnvelope;

use crate::services::DialogController;
use crate::types::DialogHandle;

/// Callback attached to a dialog when it is opened.
///
/// Hooks run after the controller released its state lock, so they may call
/// back into the dialog (for example to close it) or into other controllers.
#[async_trait]
pub trait StepHook: Send + Sync {
    /// Called after each rendered step.
    async fn on_step(
        &self,
        envelope: &ResponseEnvelope,
        dialog: &DialogController,
        handle: DialogHandle,
    );

    /// Called once after the backend closed the dialog with `close: true`.
    ///
    /// Closing from the host (Esc, close button) does not fire this.
    async fn on_close(&self, _envelope: &ResponseEnvelope) {}
}
