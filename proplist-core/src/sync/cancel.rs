//! Cancellation tokens for in-flight sync requests.
//!
//! A request cannot be aborted once issued; the token instead suppresses
//! the *application* of a late response. A view that is torn down while a
//! mutation is outstanding cancels its token and the engine discards the
//! response when it eventually arrives.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag cancelling the application of pending sync responses.
///
/// Clones share state: cancelling any clone cancels them all.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a live (non-cancelled) token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Marks the token cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true if the token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
