//! 界面组件

pub mod dialog;
pub mod page;
pub mod panel;
pub mod statusbar;
