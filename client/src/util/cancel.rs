//! Cancellation tokens for browser tasks that outlive a render pass.
//!
//! A `CancelToken` is a shared flag. Async work (the company fetch, the
//! slide rotation loop) holds a clone and checks it before touching reactive
//! state; the owning component fires it from `on_cleanup` through a
//! `CancelGuard`, so teardown always stops further commits.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Hand `value` to `commit` unless the token has fired.
    ///
    /// Returns `true` when the commit ran.
    pub fn commit<T>(&self, value: T, commit: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            return false;
        }
        commit(value);
        true
    }

    /// Scoped handle that cancels the token when dropped.
    #[must_use]
    pub fn guard(&self) -> CancelGuard {
        CancelGuard(self.clone())
    }
}

/// Cancels its token on drop. Move it into `on_cleanup` to tie a task's
/// lifetime to the owning component.
#[derive(Debug)]
pub struct CancelGuard(CancelToken);

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.0.cancel();
    }
}
