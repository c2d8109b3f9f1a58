//! Rendering side of the controllers

use trionyx_ui_transport::DialogSize;

use crate::types::{DialogHandle, PanelContent};

/// Modal overlay renderer.
///
/// Calls are made while the controller holds its state lock, so they arrive
/// in order and never interleave with another dialog's calls. Implementations
/// must not call back into the controller.
pub trait DialogSurface: Send + Sync {
    /// Create an empty shell of the given width class.
    fn mount(&self, handle: DialogHandle, size: DialogSize);

    /// Replace the body with a loading placeholder.
    fn show_loading(&self);

    fn set_title(&self, title: &str);

    /// Replace the body with server HTML.
    fn set_body(&self, html: &str);

    /// Close affordance and busy indicator are always present; the submit
    /// control only when `submit_label` is `Some`.
    fn set_footer(&self, submit_label: Option<&str>);

    /// Disable input and show the busy indicator, or undo both.
    fn set_busy(&self, busy: bool);

    /// Show a generic failure indicator; the current content stays.
    fn show_failure(&self, message: &str);

    /// Re-run widget initialisation on the freshly rendered body.
    fn initialize_widgets(&self);

    /// Tear the overlay down.
    fn unmount(&self);
}

/// Side panel renderer.
pub trait PanelSurface: Send + Sync {
    /// Replace title, fixed content, content, theme and action menu.
    fn render(&self, content: &PanelContent);

    /// Empty the panel.
    fn clear(&self);

    fn set_visible(&self, visible: bool);
}
