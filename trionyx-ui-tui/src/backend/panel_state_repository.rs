//! 面板状态仓库
//!
//! 使用 JSON 文件存储 `页面路径 → 面板 URL` 映射
//! 实现 trionyx-ui-core 的 PanelStateStore trait
//!
//! 文件是一个带命名空间的 JSON 文档：
//!     { "trionyx.panel": { "/users/": "/panel/users/1/" } }
//! 其他键原样保留。

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use trionyx_ui_core::traits::PanelStateMap;
use trionyx_ui_core::{CoreError, CoreResult, PanelStateStore};

use super::config_service::get_config_dir;

/// 文档中的命名空间键
pub const PANEL_STATE_KEY: &str = "trionyx.panel";

/// 获取面板状态文件路径
fn get_panel_state_file() -> PathBuf {
    get_config_dir().join("panel-state.json")
}

/// 基于 JSON 文件的面板状态仓库
pub struct JsonFilePanelStateStore {
    path: PathBuf,
    /// 内存缓存，`None` 表示尚未从文件加载
    cache: Mutex<Option<PanelStateMap>>,
}

impl JsonFilePanelStateStore {
    pub fn new() -> Self {
        Self::with_path(get_panel_state_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// 读取整个文档，文件不存在或为空时返回空文档
    async fn read_document(&self) -> CoreResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?
        {
            Value::Object(document) => Ok(document),
            _ => Err(CoreError::SerializationError(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    /// 从文件加载映射
    async fn load_from_file(&self) -> CoreResult<PanelStateMap> {
        let mut document = self.read_document().await?;
        match document.remove(PANEL_STATE_KEY) {
            Some(entries) => serde_json::from_value(entries)
                .map_err(|e| CoreError::SerializationError(e.to_string())),
            None => Ok(PanelStateMap::new()),
        }
    }

    /// 保存映射到文件（保留文档中的其他键）
    async fn save_to_file(&self, entries: &PanelStateMap) -> CoreResult<()> {
        let mut document = self.read_document().await?;
        let value = serde_json::to_value(entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        document.insert(PANEL_STATE_KEY.to_string(), value);

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .await
                    .map_err(|e| CoreError::StorageError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        Ok(())
    }

    /// 在锁内读取-修改-写回
    async fn modify(&self, change: impl FnOnce(&mut PanelStateMap)) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        let mut entries = match cache.as_ref() {
            Some(entries) => entries.clone(),
            None => self.load_from_file().await?,
        };

        change(&mut entries);
        self.save_to_file(&entries).await?;

        *cache = Some(entries);
        Ok(())
    }
}

impl Default for JsonFilePanelStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PanelStateStore for JsonFilePanelStateStore {
    async fn get(&self, path: &str) -> CoreResult<Option<String>> {
        Ok(self.all().await?.get(path).cloned())
    }

    async fn set(&self, path: &str, url: &str) -> CoreResult<()> {
        self.modify(|entries| {
            entries.insert(path.to_string(), url.to_string());
        })
        .await
    }

    async fn remove(&self, path: &str) -> CoreResult<()> {
        self.modify(|entries| {
            entries.remove(path);
        })
        .await
    }

    async fn all(&self) -> CoreResult<PanelStateMap> {
        let mut cache = self.cache.lock().await;
        if let Some(entries) = cache.as_ref() {
            return Ok(entries.clone());
        }

        let entries = self.load_from_file().await?;
        *cache = Some(entries.clone());
        Ok(entries)
    }
}
