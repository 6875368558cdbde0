use std::fmt;
use std::sync::{Mutex, PoisonError};

type CancelFn = Box<dyn FnOnce() + Send>;

/// Handle to a settings-store observation.
///
/// Cancelling is idempotent, and dropping the handle cancels it.
pub struct Subscription {
    cancel: Mutex<Option<CancelFn>>,
}

impl Subscription {
    /// Creates a subscription that runs `cancel` the first time it is cancelled.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Mutex::new(Some(Box::new(cancel))),
        }
    }

    pub fn cancel(&self) {
        let cancel = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(cancel) = cancel {
            cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
