//! Persisted panel state abstract Trait

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Page path → panel URL.
pub type PanelStateMap = HashMap<String, String>;

/// Panel State Store Trait
///
/// Holds which panel was open on which page. Shared by every controller of
/// the process; last write wins.
///
/// Platform implementation:
/// - Tests / embedded use: `InMemoryPanelStateStore`
/// - Terminal host: `JsonFilePanelStateStore` (JSON document in the config directory)
#[async_trait]
pub trait PanelStateStore: Send + Sync {
    /// Panel URL stored for `path`
    async fn get(&self, path: &str) -> CoreResult<Option<String>>;

    /// Store `url` as the panel of `path`
    async fn set(&self, path: &str, url: &str) -> CoreResult<()>;

    /// Forget the panel of `path`
    async fn remove(&self, path: &str) -> CoreResult<()>;

    /// Whole mapping
    async fn all(&self) -> CoreResult<PanelStateMap>;
}

/// In-memory panel state store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryPanelStateStore {
    entries: Arc<RwLock<PanelStateMap>>,
}

impl InMemoryPanelStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PanelStateStore for InMemoryPanelStateStore {
    async fn get(&self, path: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.read().await.get(path).cloned())
    }

    async fn set(&self, path: &str, url: &str) -> CoreResult<()> {
        self.entries
            .write()
            .await
            .insert(path.to_string(), url.to_string());
        Ok(())
    }

    async fn remove(&self, path: &str) -> CoreResult<()> {
        self.entries.write().await.remove(path);
        Ok(())
    }

    async fn all(&self) -> CoreResult<PanelStateMap> {
        Ok(self.entries.read().await.clone())
    }
}
