//! 当前页面与浏览历史

use chrono::{DateTime, Local};

/// 保留的历史条数
const MAX_HISTORY: usize = 50;

/// 一次页面访问
#[derive(Debug, Clone)]
pub struct PageVisit {
    pub path: String,
    pub at: DateTime<Local>,
}

/// 页面状态
#[derive(Debug, Default)]
pub struct PageState {
    /// 当前页面路径，首次导航前为空
    pub path: String,
    /// 最近访问在前
    pub history: Vec<PageVisit>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次导航
    pub fn visit(&mut self, path: &str) {
        path.clone_into(&mut self.path);
        self.history.insert(
            0,
            PageVisit {
                path: path.to_string(),
                at: Local::now(),
            },
        );
        self.history.truncate(MAX_HISTORY);
    }
}
