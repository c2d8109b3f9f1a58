use std::fmt;
use std::sync::Arc;

use trionyx_ui_transport::{DialogSize, FormData};

use crate::traits::StepHook;

/// Identity of a mounted modal.
///
/// Handles increase monotonically; a handle stays valid until its modal is
/// unmounted. Every asynchronous completion is checked against the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogHandle(u64);

impl DialogHandle {
    /// Handles are normally minted by the dialog controller; hosts only build
    /// them to replay surface events.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DialogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog#{}", self.0)
    }
}

/// How a dialog is opened.
#[derive(Default, Clone)]
pub struct OpenOptions {
    pub size: DialogSize,
    /// POST this form instead of issuing a GET for the first step.
    pub initial_post: Option<FormData>,
    /// Called after every rendered step and when the backend closes the dialog.
    pub on_step: Option<Arc<dyn StepHook>>,
}

impl OpenOptions {
    #[must_use]
    pub fn sized(size: DialogSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_post(mut self, form: FormData) -> Self {
        self.initial_post = Some(form);
        self
    }

    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn StepHook>) -> Self {
        self.on_step = Some(hook);
        self
    }
}

impl fmt::Debug for OpenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenOptions")
            .field("size", &self.size)
            .field("initial_post", &self.initial_post)
            .field("on_step", &self.on_step.is_some())
            .finish()
    }
}

/// Result of applying one envelope (or of a submit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Title, body and footer were replaced.
    Rendered,
    /// The backend closed the dialog.
    Closed,
    /// The host navigated to the given URL and the dialog was unmounted.
    Redirected(String),
    /// The envelope belonged to a dialog that is no longer mounted.
    Stale,
    /// A submit arrived while a request was already in flight.
    Ignored,
}
