//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染到终端
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 + 页面区 / 面板 + 状态栏
//!         mod components;     // dialog / page / panel / statusbar
//!         pub mod theme;      // 主题与样式
//!
//!
//!     渲染顺序：
//!         1. 标题栏（后端地址）
//!         2. 页面区；面板可见时右侧 40% 为面板
//!         3. 状态栏（命令行聚焦时为输入框）
//!         4. 对话框（最上层，按 DialogSize 居中）
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
