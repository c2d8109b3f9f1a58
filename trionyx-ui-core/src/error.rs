//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use trionyx_ui_transport::TransportError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The backend answered with a non-success status
    #[error("{message}")]
    Application {
        status: Option<String>,
        message: String,
    },

    /// Submit without an open dialog
    #[error("No dialog is open")]
    NoActiveDialog,

    /// Panel action index out of range or pointing at a divider
    #[error("Panel action not found: {0}")]
    ActionNotFound(usize),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Transport error (converting from library)
    #[error("{0}")]
    Transport(#[from] TransportError),
}

impl CoreError {
    /// Whether it is expected behavior (backend refusal, user input, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Application { .. } | Self::NoActiveDialog | Self::ActionNotFound(_) => true,
            Self::Transport(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// Log at `warn` or `error` depending on [`CoreError::is_expected`].
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
