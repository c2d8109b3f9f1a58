//! 对话框控制器

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use trionyx_ui_transport::{DialogSize, FormData, ResponseEnvelope, TransportError};

use crate::error::{CoreError, CoreResult};
use crate::services::UiContext;
use crate::traits::StepHook;
use crate::types::{DialogHandle, NotifyLevel, OpenOptions, StepOutcome};

/// Shown in the footer when a request could not complete.
const GENERIC_FAILURE: &str = "Request failed, please try again.";

/// The mounted modal.
struct ActiveDialog {
    handle: DialogHandle,
    size: DialogSize,
    submit_url: String,
    in_flight: bool,
    hook: Option<Arc<dyn StepHook>>,
}

/// Owner of the single modal overlay.
///
/// Every envelope is applied in a fixed order: close, redirect, application
/// failure, render. Network awaits and hook calls happen without the state
/// lock held; surface calls happen with it held so they never interleave.
pub struct DialogController {
    ctx: Arc<UiContext>,
    active: Mutex<Option<ActiveDialog>>,
    last_handle: AtomicU64,
}

impl DialogController {
    #[must_use]
    pub fn new(ctx: Arc<UiContext>) -> Self {
        Self {
            ctx,
            active: Mutex::new(None),
            last_handle: AtomicU64::new(0),
        }
    }

    /// Mount a new modal and load its first step from `url`.
    ///
    /// Any modal already open is torn down first. When the first request
    /// fails the modal stays mounted with its failure indicator.
    pub async fn open(&self, url: &str, options: OpenOptions) -> CoreResult<DialogHandle> {
        let handle = DialogHandle::new(self.last_handle.fetch_add(1, Ordering::SeqCst) + 1);
        let OpenOptions {
            size,
            initial_post,
            on_step,
        } = options;

        {
            let mut active = self.active.lock().await;
            if let Some(previous) = active.take() {
                log::debug!("[dialog] Replacing {} with {handle}", previous.handle);
                self.ctx.dialog_surface.unmount();
            }
            self.ctx.dialog_surface.mount(handle, size);
            self.ctx.dialog_surface.show_loading();
            self.ctx.dialog_surface.set_busy(true);
            *active = Some(ActiveDialog {
                handle,
                size,
                submit_url: url.to_string(),
                in_flight: true,
                hook: on_step,
            });
        }
        log::info!("[dialog] Opening {handle} ({}) from {url}", size.as_str());

        let response = match initial_post {
            Some(form) => self.ctx.transport.post(url, form).await,
            None => self.ctx.transport.get(url).await,
        };

        match response {
            Ok(envelope) => {
                self.apply_envelope(handle, envelope).await?;
                Ok(handle)
            }
            Err(e) => Err(self.request_failed(handle, e).await),
        }
    }

    /// Apply one backend response to the modal identified by `handle`.
    pub async fn apply_envelope(
        &self,
        handle: DialogHandle,
        envelope: ResponseEnvelope,
    ) -> CoreResult<StepOutcome> {
        let hook = {
            let mut guard = self.active.lock().await;
            let Some(active) = guard.as_mut().filter(|a| a.handle == handle) else {
                log::debug!("[dialog] Discarding response for stale {handle}");
                return Ok(StepOutcome::Stale);
            };

            if envelope.close {
                let hook = active.hook.take();
                *guard = None;
                self.ctx.dialog_surface.unmount();
                drop(guard);
                log::info!("[dialog] {handle} closed by backend");
                if let Some(hook) = hook {
                    hook.on_close(&envelope).await;
                }
                return Ok(StepOutcome::Closed);
            }

            if let Some(target) = envelope.redirect_target() {
                self.ctx.navigator.navigate(target);
                *guard = None;
                self.ctx.dialog_surface.unmount();
                log::info!("[dialog] {handle} redirected to {target}");
                return Ok(StepOutcome::Redirected(target.to_string()));
            }

            if envelope.is_failure() {
                active.in_flight = false;
                self.ctx.dialog_surface.set_busy(false);
                let message = envelope.failure_message();
                self.ctx.notifier.notify(NotifyLevel::Error, &message);
                let error = CoreError::Application {
                    status: envelope.status.as_ref().map(|s| s.as_str().to_string()),
                    message,
                };
                error.log("[dialog] Backend refused step");
                return Err(error);
            }

            if let Some(next) = envelope.next_url() {
                active.submit_url = next.to_string();
            }
            let surface = &self.ctx.dialog_surface;
            surface.set_title(&envelope.title);
            surface.set_body(&envelope.content);
            surface.set_footer(envelope.submit_label());
            surface.initialize_widgets();
            surface.set_busy(false);
            active.in_flight = false;
            log::debug!(
                "[dialog] {handle} rendered '{}' (submit -> {})",
                envelope.title,
                active.submit_url
            );
            active.hook.clone()
        };

        if let Some(hook) = hook {
            hook.on_step(&envelope, self, handle).await;
        }
        Ok(StepOutcome::Rendered)
    }

    /// POST the serialized form to the bound submit URL.
    ///
    /// A second submit while a request is outstanding is ignored.
    pub async fn submit(&self, form: FormData) -> CoreResult<StepOutcome> {
        let (handle, url) = {
            let mut guard = self.active.lock().await;
            let Some(active) = guard.as_mut() else {
                return Err(CoreError::NoActiveDialog);
            };
            if active.in_flight {
                log::debug!("[dialog] Submit ignored, {} is busy", active.handle);
                return Ok(StepOutcome::Ignored);
            }
            active.in_flight = true;
            self.ctx.dialog_surface.set_busy(true);
            (active.handle, active.submit_url.clone())
        };

        log::debug!("[dialog] Submitting {handle} to {url} ({} fields)", form.len());
        match self.ctx.transport.post(&url, form).await {
            Ok(envelope) => self.apply_envelope(handle, envelope).await,
            Err(e) => Err(self.request_failed(handle, e).await),
        }
    }

    /// Unmount whatever modal is open. Returns whether one was open.
    pub async fn close(&self) -> bool {
        let mut guard = self.active.lock().await;
        match guard.take() {
            Some(active) => {
                self.ctx.dialog_surface.unmount();
                log::info!("[dialog] {} closed", active.handle);
                true
            }
            None => false,
        }
    }

    /// Unmount the modal only if `handle` is still the live one.
    pub async fn close_dialog(&self, handle: DialogHandle) -> bool {
        let mut guard = self.active.lock().await;
        if guard.as_ref().is_some_and(|a| a.handle == handle) {
            *guard = None;
            self.ctx.dialog_surface.unmount();
            log::info!("[dialog] {handle} closed");
            true
        } else {
            false
        }
    }

    pub async fn is_open(&self) -> bool {
        self.active.lock().await.is_some()
    }

    pub async fn active_handle(&self) -> Option<DialogHandle> {
        self.active.lock().await.as_ref().map(|a| a.handle)
    }

    /// URL the next submit will be posted to.
    pub async fn submit_url(&self) -> Option<String> {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|a| a.submit_url.clone())
    }

    pub async fn is_busy(&self) -> bool {
        self.active.lock().await.as_ref().is_some_and(|a| a.in_flight)
    }

    pub async fn size(&self) -> Option<DialogSize> {
        self.active.lock().await.as_ref().map(|a| a.size)
    }

    /// Keep the last good state, re-enable input and show the failure indicator.
    async fn request_failed(&self, handle: DialogHandle, error: TransportError) -> CoreError {
        let mut guard = self.active.lock().await;
        if let Some(active) = guard.as_mut().filter(|a| a.handle == handle) {
            active.in_flight = false;
            self.ctx.dialog_surface.set_busy(false);
            self.ctx.dialog_surface.show_failure(GENERIC_FAILURE);
        }
        let error = CoreError::from(error);
        error.log(&format!("[dialog] Request for {handle} failed"));
        error
    }
}
