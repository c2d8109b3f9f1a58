use crate::types::NotifyLevel;

/// User-facing alerts.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NotifyLevel, message: &str);
}
