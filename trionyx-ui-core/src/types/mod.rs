//! 类型定义模块

mod notification;
mod overlay;
mod panel;

pub use notification::NotifyLevel;
pub use overlay::{DialogHandle, OpenOptions, StepOutcome};
pub use panel::{ActionBehavior, ActionStyle, PanelAction, PanelContent};
