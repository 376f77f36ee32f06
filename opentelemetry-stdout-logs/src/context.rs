//! Cancellation and deadline information carried into exporter calls.
//!
//! An [`ExportContext`] is cheap to clone and may be shared between threads.
//! Children created with [`ExportContext::with_cancel`] or
//! [`ExportContext::with_deadline`] observe their parent's cancellation and
//! can only ever shorten the parent's deadline.
use crate::error::ContextError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Per-call context passed to every exporter operation.
#[derive(Clone, Default)]
pub struct ExportContext {
    signal: Option<Arc<CancelSignal>>,
    deadline: Option<Instant>,
}

struct CancelSignal {
    canceled: AtomicBool,
    parent: Option<Arc<CancelSignal>>,
}

impl CancelSignal {
    fn is_canceled(&self) -> bool {
        let mut current = Some(self);
        while let Some(signal) = current {
            if signal.canceled.load(Ordering::SeqCst) {
                return true;
            }
            current = signal.parent.as_deref();
        }
        false
    }
}

impl ExportContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context together with the handle that cancels it.
    ///
    /// Cancelling the handle does not affect `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use opentelemetry_stdout_logs::{ContextError, ExportContext};
    ///
    /// let (ctx, cancel) = ExportContext::background().with_cancel();
    /// assert!(ctx.check().is_ok());
    /// cancel.cancel();
    /// assert_eq!(ctx.check(), Err(ContextError::Canceled));
    /// ```
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let signal = Arc::new(CancelSignal {
            canceled: AtomicBool::new(false),
            parent: self.signal.clone(),
        });
        let ctx = ExportContext {
            signal: Some(Arc::clone(&signal)),
            deadline: self.deadline,
        };
        (ctx, CancelHandle { signal })
    }

    /// Derive a child context that expires at `deadline`, or at the parent's
    /// deadline if that comes first.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current <= deadline => current,
            _ => deadline,
        };
        ExportContext {
            signal: self.signal.clone(),
            deadline: Some(deadline),
        }
    }

    /// Derive a child context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.clone(),
        }
    }

    /// The effective deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns an error if work should no longer start under this context.
    ///
    /// Cancellation is reported in preference to an expired deadline.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.signal.as_ref().is_some_and(|s| s.is_canceled()) {
            return Err(ContextError::Canceled);
        }
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(ContextError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for ExportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportContext")
            .field(
                "canceled",
                &self.signal.as_ref().is_some_and(|s| s.is_canceled()),
            )
            .field("deadline", &self.deadline)
            .finish()
    }
}

/// Cancels the [`ExportContext`] it was created with, and every context
/// derived from it.
#[derive(Clone)]
pub struct CancelHandle {
    signal: Arc<CancelSignal>,
}

impl CancelHandle {
    /// Cancel the associated context. Calling this more than once is harmless.
    pub fn cancel(&self) {
        self.signal.canceled.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) has been called on this handle.
    pub fn is_canceled(&self) -> bool {
        self.signal.canceled.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("canceled", &self.is_canceled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_always_usable() {
        let ctx = ExportContext::background();
        assert!(ctx.check().is_ok());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn cancel_propagates_to_children_only() {
        let (parent, parent_cancel) = ExportContext::background().with_cancel();
        let (child, child_cancel) = parent.with_cancel();
        let grandchild = child.with_timeout(Duration::from_secs(3600));

        child_cancel.cancel();
        assert!(parent.check().is_ok());
        assert_eq!(child.check(), Err(ContextError::Canceled));
        assert_eq!(grandchild.check(), Err(ContextError::Canceled));

        let (other_child, _) = parent.with_cancel();
        assert!(other_child.check().is_ok());
        parent_cancel.cancel();
        assert_eq!(other_child.check(), Err(ContextError::Canceled));
    }

    #[test]
    fn cancel_is_idempotent() {
        let (ctx, cancel) = ExportContext::background().with_cancel();
        cancel.cancel();
        cancel.cancel();
        assert!(cancel.is_canceled());
        assert_eq!(ctx.check(), Err(ContextError::Canceled));
    }

    #[test]
    fn past_deadline_is_exceeded() {
        let now = Instant::now();
        let ctx = ExportContext::background().with_deadline(now);
        assert_eq!(ctx.check(), Err(ContextError::DeadlineExceeded));
    }

    #[test]
    fn child_cannot_extend_parent_deadline() {
        let now = Instant::now();
        let parent = ExportContext::background().with_deadline(now + Duration::from_secs(1));
        let child = parent.with_deadline(now + Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());

        let shorter = parent.with_deadline(now);
        assert_eq!(shorter.deadline(), Some(now));
    }

    #[test]
    fn cancellation_wins_over_deadline() {
        let (ctx, cancel) = ExportContext::background().with_cancel();
        let ctx = ctx.with_deadline(Instant::now());
        cancel.cancel();
        assert_eq!(ctx.check(), Err(ContextError::Canceled));
    }
}
