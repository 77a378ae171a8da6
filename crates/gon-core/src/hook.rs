//! The error-reporting hook.
//!
//! Structural errors (a missing `}` or `]`) and type errors (an accessor used
//! on the wrong kind of node) are routed through an [`ErrorHook`] instead of
//! being returned unconditionally. A hook either hands the error back, which
//! aborts the operation, or swallows it, in which case parsing continues
//! best-effort and accessors fall back to the node's raw payload.
//!
//! A process-wide default hook is used by [`load`](crate::load) and
//! [`load_from_buffer`](crate::load_from_buffer). It starts out as
//! [`FailFast`]. A [`Loader`](crate::Loader) can carry its own hook, which is
//! how tests inject a capturing hook without touching global state.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{GonError, Result};

/// Receives every structural and type error.
pub trait ErrorHook: Send + Sync {
    /// Return `Err` to abort the current operation, `Ok(())` to continue.
    fn report(&self, error: GonError) -> Result<()>;
}

/// Hands every error back to the caller. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl ErrorHook for FailFast {
    fn report(&self, error: GonError) -> Result<()> {
        Err(error)
    }
}

/// Logs every error at `warn` level and continues.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAndContinue;

impl ErrorHook for LogAndContinue {
    fn report(&self, error: GonError) -> Result<()> {
        log::warn!("{error}; continuing");
        Ok(())
    }
}

impl<F> ErrorHook for F
where
    F: Fn(GonError) -> Result<()> + Send + Sync,
{
    fn report(&self, error: GonError) -> Result<()> {
        self(error)
    }
}

static GLOBAL_HOOK: RwLock<Option<Arc<dyn ErrorHook>>> = RwLock::new(None);

/// Replace the process-wide default hook.
///
/// Documents already parsed keep the hook they were parsed with.
pub fn set_error_hook(hook: Arc<dyn ErrorHook>) {
    *GLOBAL_HOOK.write().unwrap_or_else(PoisonError::into_inner) = Some(hook);
}

/// Restore [`FailFast`] as the process-wide default hook.
pub fn reset_error_hook() {
    *GLOBAL_HOOK.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The current process-wide default hook.
pub fn error_hook() -> Arc<dyn ErrorHook> {
    GLOBAL_HOOK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| Arc::new(FailFast))
}
