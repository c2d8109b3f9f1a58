//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ DialogMsg │               ▼               │   │
//！│  │   ┌─────────┐          │ PanelMsg  │          ┌──────────┐         │   │
//！│  │   │  View   │          │ CmdLine   │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                      ▲                    │               │   │
//！│  └────────│──────────────────────│────────────────────│───────────────┘   │
//！│           │          BackendEvent│                    │ BackendCommand    │
//！│           ▼                      │                    ▼                   │
//！│      ┌─────────┐            ┌────┴─────────────────────────┐              │
//！│      │  终端   │            │          Backend 层          │              │
//！│      │ (Util)  │            └──────────────┬───────────────┘              │
//！│      └─────────┘                           │                              │
//！│                                            ▼                              │
//！│                                 ┌───────────────────┐                     │
//！│                                 │  trionyx-ui-core  │                     │
//！│                                 └───────────────────┘                     │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，通过 trionyx-ui-core 的两个控制器
//! 实现对话框与面板协议。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;               // 核心服务入口（UiService）
//!         mod surfaces;                   // surface / navigator / notifier 的通道实现
//!         mod panel_state_repository;     // 面板状态持久化（JSON 文件）
//!         mod config_service;             // 配置（TOML 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（UiService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程：
//!         1. 创建 HttpTransport（cookie jar、防伪 token 请求头）
//!         2. 创建 JsonFilePanelStateStore
//!         3. 创建通道 surface、ChannelNavigator、ChannelNotifier
//!         4. 组装 UiContext
//!         5. 创建 DialogController 与 PanelController
//!
//!     dispatch(command)：
//!         Navigate 同步执行，其余命令 spawn 到 tokio 运行时，
//!         因此请求未返回时 Esc 依然可以关闭对话框。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、通道实现（surfaces.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     控制器对 DialogSurface / PanelSurface / Navigator / Notifier 的调用
//!     全部翻译成 BackendEvent，经无界通道送回主循环。
//!     控制器持锁调用 surface，所以事件顺序与调用顺序一致。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、面板状态仓库（JsonFilePanelStateStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：<config_dir>/trionyx-ui-tui/panel-state.json
//!     文档格式：{ "trionyx.panel": { "<页面路径>": "<面板 URL>" } }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在对话框中按 Enter
//!         ↓
//!     Update 层生成 BackendCommand::SubmitDialog(form)
//!         ↓
//!     主循环把命令交给 UiService::dispatch
//!         ↓
//!     DialogController::submit 发出 multipart POST
//!         ↓
//!     响应信封经 ChannelDialogSurface 变成 BackendEvent
//!         ↓
//!     主循环收到事件，Update 层更新 Model
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod core_service;
mod panel_state_repository;
mod surfaces;

pub use config_service::{AppConfig, ConfigService, TomlConfigService};
pub use core_service::UiService;
