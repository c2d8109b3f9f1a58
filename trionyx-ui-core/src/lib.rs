//! Trionyx UI Core Library
//!
//! Client side of the Trionyx dialog / panel protocol:
//! - Dialog controller: one modal overlay driven by successive response envelopes
//! - Panel controller: one slide-in panel, restored per page path
//!
//! Rendering, navigation, notifications and storage are abstracted through
//! traits so the same controllers drive a browser shell or a terminal host.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{DialogController, PanelController, ReloadPanelOnSuccess, UiContext};
pub use traits::{
    DialogSurface, InMemoryPanelStateStore, Navigator, Notifier, PanelStateStore, PanelSurface,
    StepHook,
};
pub use types::{
    ActionBehavior, ActionStyle, DialogHandle, NotifyLevel, OpenOptions, PanelAction,
    PanelContent, StepOutcome,
};

// Re-export transport types the host needs
pub use trionyx_ui_transport::{
    DialogOptions, DialogSize, EnvelopeStatus, FormData, FormField, PanelTheme, ResponseEnvelope,
    Transport, TransportError,
};
