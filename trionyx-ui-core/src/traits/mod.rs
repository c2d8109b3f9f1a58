//! Host abstraction trait definitions

mod navigator;
mod notifier;
mod panel_state_store;
mod step_hook;
mod surfaces;

pub use navigator::Navigator;
pub use notifier::Notifier;
pub use panel_state_store::{InMemoryPanelStateStore, PanelStateMap, PanelStateStore};
pub use step_hook::StepHook;
pub use surfaces::{DialogSurface, PanelSurface};
