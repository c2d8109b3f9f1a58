//! 配置服务
//!
//! 配置文件：`<config_dir>/trionyx-ui-tui/config.toml`，不存在时使用默认值。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trionyx_ui_transport::{
    CsrfPolicy, DEFAULT_CSRF_COOKIE, DEFAULT_CSRF_HEADER, DEFAULT_REQUEST_TIMEOUT_SECS,
    HttpTransportConfig,
};

use crate::view::theme::Theme;

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trionyx-ui-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端根地址，相对 URL 都基于它解析
    pub base_url: String,
    /// 启动后打开的页面路径
    pub start_path: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// 预置到 cookie jar 的会话 cookie（`name=value`）
    pub session_cookie: Option<String>,
    pub theme: Theme,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            start_path: "/".to_string(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            session_cookie: None,
            theme: Theme::Dark,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// 转换为 HTTP 传输层配置
    pub fn transport_config(&self) -> HttpTransportConfig {
        let mut config = HttpTransportConfig::new(self.base_url.clone())
            .with_csrf(CsrfPolicy::new(&self.csrf_cookie, &self.csrf_header))
            .with_timeout(Duration::from_secs(self.timeout_secs.max(1)));
        if let Some(cookie) = self.session_cookie.as_deref().filter(|c| !c.is_empty()) {
            config = config.with_cookie(cookie);
        }
        config
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// TOML 文件配置服务
pub struct TomlConfigService {
    path: PathBuf,
}

impl TomlConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TomlConfigService {
    fn default() -> Self {
        Self::new(get_config_dir().join("config.toml"))
    }
}

impl ConfigService for TomlConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = TomlConfigService::new(dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"https://admin.example.com/\"\ntheme = \"light\"\n",
        )
        .unwrap();

        let config = TomlConfigService::new(path).load().unwrap();
        assert_eq!(config.base_url, "https://admin.example.com/");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.csrf_cookie, DEFAULT_CSRF_COOKIE);
        assert_eq!(config.start_path, "/");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = TomlConfigService::new(dir.path().join("nested").join("config.toml"));
        let config = AppConfig {
            session_cookie: Some("sessionid=abc".into()),
            timeout_secs: 5,
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();
        assert!(TomlConfigService::new(path).load().is_err());
    }

    #[test]
    fn transport_config_seeds_session_cookie() {
        let config = AppConfig {
            session_cookie: Some("sessionid=abc".into()),
            csrf_header: "X-Token".into(),
            ..AppConfig::default()
        };
        let transport = config.transport_config();
        assert_eq!(transport.cookies, vec!["sessionid=abc".to_string()]);
        assert_eq!(transport.csrf.header_name, "X-Token");
        assert_eq!(transport.timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    }
}
